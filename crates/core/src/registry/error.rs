//! Error types for catalog loading and editing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or editing the project catalog.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Failed to read the catalog file from disk.
    #[error("Failed to read project catalog at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the catalog file to disk.
    #[error("Failed to write project catalog at {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The catalog file is not valid JSON for an array of projects.
    #[error("Failed to parse project catalog at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Two catalog entries share a name. Names are the supervisor's keys,
    /// so this is rejected at load time, not at runtime.
    #[error("Duplicate project name in catalog: {name}")]
    DuplicateName { name: String },

    /// An `add` collides with an existing project's name or path.
    #[error("Project already exists: {name}")]
    ProjectExists { name: String },
}

/// Type alias for Result with RegistryError.
pub type RegistryResult<T> = Result<T, RegistryError>;
