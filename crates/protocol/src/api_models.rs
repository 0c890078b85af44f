//! HTTP API request and response shapes.
//!
//! This module defines the JSON contract between the dashboard web client
//! and the server. The shapes mirror what the client renders:
//!
//! ```json
//! {
//!   "projects": [
//!     {"name": "web", "cmd": "npm run dev", "path": "/home/me/web", "running": true}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::state_models::ProjectStatus;

/// One row of the dashboard project table.
///
/// `running` collapses the four-state lifecycle into the boolean the client
/// understands: anything not explicitly stopped is actionable "Stop".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ProjectView {
    pub name: String,
    pub cmd: String,
    pub path: String,
    pub running: bool,
}

impl From<&ProjectStatus> for ProjectView {
    fn from(status: &ProjectStatus) -> Self {
        Self {
            name: status.name.clone(),
            cmd: status.cmd.clone(),
            path: status.path.clone(),
            running: status.lifecycle.is_active(),
        }
    }
}

/// Response body for `GET /api/projects`.
///
/// Projects appear in registry declaration order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ProjectsResponse {
    pub projects: Vec<ProjectView>,
}

/// Request body for `POST /api/projects/start` and `POST /api/projects/stop`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ProjectActionRequest {
    /// Name of the project to act on.
    pub name: String,
}

/// Success body for start/stop operations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct MessageResponse {
    pub message: String,
}

/// Response body for `GET /api/projects/{name}/output`.
///
/// The retained tail of the child's combined stdout/stderr, oldest first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct OutputResponse {
    pub lines: Vec<String>,
}

/// Error body for all non-2xx API responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ErrorResponse {
    pub error: String,
}
