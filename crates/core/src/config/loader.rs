//! Global configuration loader for the `~/.devkit/` directory.
//!
//! Layout:
//! - `config.toml`: global settings (dashboard port, stop timings, output buffering)
//! - `projects.json`: the project catalog (loaded by [`crate::registry`])

use crate::config::error::{ConfigError, ConfigResult};
use dk_protocol::config_models::GlobalConfig;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the devkit home directory.
pub const HOME_ENV: &str = "DEVKIT_HOME";

/// Resolve the devkit home directory.
///
/// `DEVKIT_HOME` takes precedence when set (also the seam used by tests);
/// otherwise this is `~/.devkit`.
///
/// # Errors
///
/// Returns `ConfigError::NoHomeDir` if neither the override nor a home
/// directory is available.
pub fn devkit_home() -> ConfigResult<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir()
        .map(|home| home.join(".devkit"))
        .ok_or(ConfigError::NoHomeDir)
}

/// Path of the global configuration file inside a devkit home.
pub fn config_path(home: &Path) -> PathBuf {
    home.join("config.toml")
}

/// Path of the project catalog file inside a devkit home.
pub fn projects_path(home: &Path) -> PathBuf {
    home.join("projects.json")
}

/// Load the global configuration from `config.toml`.
///
/// A missing file yields `GlobalConfig::default()` rather than an error, so
/// a freshly initialized (or minimal) home works without tweaking.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_global_config(home: &Path) -> ConfigResult<GlobalConfig> {
    let path = config_path(home);

    if !path.exists() {
        return Ok(GlobalConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::FileRead {
        path: path.clone(),
        source,
    })?;

    let config: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse { path, source })?;

    Ok(config)
}
