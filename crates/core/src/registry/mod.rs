//! Immutable project catalog and its on-disk store.
//!
//! This module provides:
//! - [`ProjectRegistry`]: the fixed, ordered catalog the supervisor runs from
//! - Store functions over `projects.json` used by the CLI to edit the catalog
//!   while no supervisor is running

pub mod catalog;
pub mod error;
pub mod store;

pub use catalog::ProjectRegistry;
pub use error::{RegistryError, RegistryResult};
pub use store::{append_project, load_projects, save_projects};
