mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    setup_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => commands::init::run(force),
        Commands::Add {
            name,
            cmd,
            path,
            command_words,
        } => commands::add::run(name, cmd, path, command_words),
        Commands::List { name } => commands::list::run(name.as_deref()).await,
        Commands::Start { name } => commands::control::run(commands::control::Action::Start, &name).await,
        Commands::Stop { name } => commands::control::run(commands::control::Action::Stop, &name).await,
        Commands::Dashboard { port, no_open } => commands::dashboard::run(port, no_open).await,
    }
}
