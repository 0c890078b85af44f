//! The immutable project catalog.

use crate::registry::error::{RegistryError, RegistryResult};
use crate::registry::store::load_projects;
use dk_protocol::project_models::Project;
use std::collections::HashMap;
use std::path::Path;

/// Fixed, ordered catalog of configured projects.
///
/// Loaded once at supervisor startup and read-only thereafter. Iteration
/// order is declaration order in `projects.json`, which is also the order
/// the dashboard renders.
#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
    index: HashMap<String, usize>,
}

impl ProjectRegistry {
    /// Build a registry from an in-memory project list.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if two projects share a name.
    pub fn from_projects(projects: Vec<Project>) -> RegistryResult<Self> {
        let mut index = HashMap::with_capacity(projects.len());

        for (position, project) in projects.iter().enumerate() {
            if index.insert(project.name.clone(), position).is_some() {
                return Err(RegistryError::DuplicateName {
                    name: project.name.clone(),
                });
            }
        }

        Ok(Self { projects, index })
    }

    /// Load the registry from a `projects.json` file.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` if the file cannot be read or parsed, or if
    /// it contains duplicate names.
    pub fn load(path: &Path) -> RegistryResult<Self> {
        Self::from_projects(load_projects(path)?)
    }

    /// All configured projects, in declaration order. Never fails.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Look up one project by name.
    pub fn lookup(&self, name: &str) -> Option<&Project> {
        self.index.get(name).map(|&position| &self.projects[position])
    }

    /// Number of configured projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
