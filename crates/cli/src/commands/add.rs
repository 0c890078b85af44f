//! `devkit add` — append a project to the catalog.

use color_eyre::eyre::bail;
use color_eyre::Result;
use colored::Colorize;
use dk_core::config::{devkit_home, projects_path};
use dk_core::init::{generate_devkit_home, InitOptions};
use dk_core::registry::append_project;
use dk_protocol::project_models::Project;
use std::path::PathBuf;

pub fn run(
    name: String,
    cmd_flag: Option<String>,
    path_flag: Option<PathBuf>,
    command_words: Vec<String>,
) -> Result<()> {
    // The command can come from --cmd, from trailing words, or both.
    let mut cmd = cmd_flag.unwrap_or_default();
    if !command_words.is_empty() {
        let words = command_words.join(" ");
        cmd = if cmd.is_empty() {
            words
        } else {
            format!("{cmd} {words}")
        };
    }
    let cmd = cmd.trim().to_string();
    if cmd.is_empty() {
        bail!("cmd is required, e.g. --cmd \"npm run dev\" or: devkit add --name web -- npm run dev");
    }

    let path = match path_flag {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let home = devkit_home()?;
    if !home.exists() {
        // First use without an explicit init; create the home on the fly.
        generate_devkit_home(&InitOptions {
            home: home.clone(),
            force: false,
        })?;
    }

    append_project(
        &projects_path(&home),
        Project {
            name: name.clone(),
            cmd,
            path: path.display().to_string(),
        },
    )?;

    println!("{} project '{}'", "Added".green(), name);
    Ok(())
}
