//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The user's home directory could not be determined and `DEVKIT_HOME`
    /// is not set.
    #[error("Could not determine a home directory; set DEVKIT_HOME explicitly")]
    NoHomeDir,

    /// Failed to read a configuration file from disk.
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("Failed to parse TOML file at {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
