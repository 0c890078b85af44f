//! On-disk store for the project catalog.
//!
//! The catalog lives in `~/.devkit/projects.json` as an ordered JSON array
//! of `{name, cmd, path}` objects. These functions are used by the CLI to
//! edit the catalog; the running supervisor only ever reads it.

use crate::registry::error::{RegistryError, RegistryResult};
use dk_protocol::project_models::Project;
use std::path::Path;

/// Read the full catalog from `projects.json`.
///
/// # Errors
///
/// Returns `RegistryError` if the file cannot be read or is not a JSON
/// array of projects.
pub fn load_projects(path: &Path) -> RegistryResult<Vec<Project>> {
    let content = std::fs::read_to_string(path).map_err(|source| RegistryError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| RegistryError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the full catalog to `projects.json`.
///
/// # Errors
///
/// Returns `RegistryError::FileWrite` if the file cannot be written.
pub fn save_projects(path: &Path, projects: &[Project]) -> RegistryResult<()> {
    let content = serde_json::to_string_pretty(projects).map_err(|source| {
        RegistryError::JsonParse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    std::fs::write(path, content).map_err(|source| RegistryError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Append one project to the catalog.
///
/// Rejects the addition when an existing project already uses the same name
/// or the same working directory.
///
/// # Errors
///
/// Returns `RegistryError::ProjectExists` on a collision, or an I/O or
/// parse error from the underlying read/write.
pub fn append_project(path: &Path, project: Project) -> RegistryResult<()> {
    let mut projects = load_projects(path)?;

    for existing in &projects {
        if existing.name == project.name || existing.path == project.path {
            return Err(RegistryError::ProjectExists {
                name: project.name,
            });
        }
    }

    projects.push(project);
    save_projects(path, &projects)
}
