//! Project catalog models for `~/.devkit/projects.json`.
//!
//! This module defines the static project catalog entries. Projects are
//! declared once in `projects.json` and are immutable for the lifetime of a
//! supervisor instance.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A configured project: a named command the supervisor can run.
///
/// Projects are stored as an ordered JSON array in `~/.devkit/projects.json`:
///
/// ```json
/// [
///   {"name": "web", "cmd": "npm run dev", "path": "/home/me/web"}
/// ]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct Project {
    /// Unique identifier for this project.
    ///
    /// Used as the key for all supervisor operations.
    pub name: String,

    /// Shell command line to execute.
    ///
    /// Split on whitespace at spawn time: the first token is the program,
    /// the rest are its arguments.
    pub cmd: String,

    /// Working directory the command is launched from.
    pub path: String,
}
