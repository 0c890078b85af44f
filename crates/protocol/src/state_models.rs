//! Runtime lifecycle state models.
//!
//! This module defines the structures for tracking the state of supervised
//! project processes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Represents the current lifecycle state of one supervised project.
///
/// Normal operation cycles through:
/// Stopped -> Starting -> Running -> Stopping -> Stopped
///
/// A child that exits on its own (crash or normal exit) takes the direct
/// Starting/Running -> Stopped edge via exit reconciliation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Lifecycle {
    /// No child process exists for this project.
    Stopped,

    /// A start request is in flight; the spawn call has not returned yet.
    Starting,

    /// The child process is alive.
    Running,

    /// A stop request is in flight; termination is not yet confirmed.
    ///
    /// A project only rests in this state after a stop that could not
    /// confirm the exit within its ceiling. It is resolved by a later
    /// reconciliation, never by guessing.
    Stopping,
}

impl Lifecycle {
    /// Whether the client should treat this project as actionable "Stop".
    ///
    /// The dashboard renders anything not explicitly stopped as running,
    /// so `Starting` counts as active.
    pub fn is_active(self) -> bool {
        matches!(self, Lifecycle::Starting | Lifecycle::Running)
    }
}

/// Record of the most recent child termination.
///
/// Retained on the project state until the next successful start so the
/// dashboard can report why a process went away.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
pub struct ExitInfo {
    /// Exit code, when the child exited normally.
    pub code: Option<i32>,

    /// Terminating signal number, when the child was killed by a signal.
    ///
    /// Always `None` on Windows.
    pub signal: Option<i32>,

    /// When the supervisor observed the exit.
    pub at: DateTime<Utc>,
}

/// Read-only snapshot of one project's supervision state.
///
/// Produced by `status()`/`list()`; reflects reconciliations already
/// processed, never the raw OS state at call time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ProjectStatus {
    /// Project name from the registry.
    pub name: String,

    /// Configured command line.
    pub cmd: String,

    /// Configured working directory.
    pub path: String,

    /// Current lifecycle state.
    pub lifecycle: Lifecycle,

    /// OS process id of the live child, when one exists.
    pub pid: Option<u32>,

    /// How the previous child terminated, if it has terminated since the
    /// last successful start.
    pub last_exit: Option<ExitInfo>,
}
