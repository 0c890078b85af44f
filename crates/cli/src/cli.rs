//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// devkit manages your local dev project processes.
#[derive(Parser)]
#[command(name = "devkit", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the devkit home directory (~/.devkit)
    Init {
        /// Overwrite an existing devkit home
        #[arg(long)]
        force: bool,
    },

    /// Add a project to the catalog
    Add {
        /// Unique project name
        #[arg(long)]
        name: String,

        /// Command line to run, e.g. --cmd "npm run dev"
        #[arg(long)]
        cmd: Option<String>,

        /// Working directory (defaults to the current directory)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Command words after `--`, e.g. `devkit add --name web -- npm run dev`
        #[arg(last = true)]
        command_words: Vec<String>,
    },

    /// List projects and their running state
    List {
        /// Show only this project
        #[arg(long)]
        name: Option<String>,
    },

    /// Start a project via the running dashboard daemon
    Start {
        /// Project name
        name: String,
    },

    /// Stop a project via the running dashboard daemon
    Stop {
        /// Project name
        name: String,
    },

    /// Run the dashboard server and project supervisor
    Dashboard {
        /// Listen port (overrides config.toml)
        #[arg(long)]
        port: Option<u16>,

        /// Do not open the browser
        #[arg(long)]
        no_open: bool,
    },
}
