//! Configuration and home directory resolution.
//!
//! This module locates the devkit home directory (`~/.devkit`, overridable
//! via `DEVKIT_HOME`) and loads the global configuration from `config.toml`.

pub mod error;
pub mod loader;

pub use error::{ConfigError, ConfigResult};
pub use loader::{config_path, devkit_home, load_global_config, projects_path};
