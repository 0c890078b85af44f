//! `devkit init` — create the devkit home directory.

use color_eyre::Result;
use colored::Colorize;
use dk_core::config::devkit_home;
use dk_core::init::{generate_devkit_home, InitOptions};

pub fn run(force: bool) -> Result<()> {
    let home = devkit_home()?;

    generate_devkit_home(&InitOptions {
        home: home.clone(),
        force,
    })?;

    println!("{} devkit in {}", "Initialized".green(), home.display());
    Ok(())
}
