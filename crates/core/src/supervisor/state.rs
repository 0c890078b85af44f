//! Per-project lifecycle state.
//!
//! A [`ProjectState`] is mutated only inside its project's critical section
//! in the supervisor; these methods are the complete set of legal
//! transitions.

use crate::supervisor::handle::{LogBuffer, ProcessHandle};
use dk_protocol::state_models::{ExitInfo, Lifecycle};
use std::sync::{Arc, Mutex};

/// Dynamic state of one supervised project.
///
/// Holds the handle iff the lifecycle is not `Stopped` (transiently absent
/// while `Starting` precedes a successful spawn, inside the same critical
/// section).
#[derive(Debug)]
pub(crate) struct ProjectState {
    lifecycle: Lifecycle,
    handle: Option<ProcessHandle>,
    last_exit: Option<ExitInfo>,
    /// Retained output of the current or most recent child.
    output: Option<Arc<Mutex<LogBuffer>>>,
    /// Bumped on every spawn; lets exit watchers ignore stale notifications.
    generation: u64,
}

impl ProjectState {
    pub(crate) fn new() -> Self {
        Self {
            lifecycle: Lifecycle::Stopped,
            handle: None,
            last_exit: None,
            output: None,
            generation: 0,
        }
    }

    pub(crate) fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub(crate) fn handle(&self) -> Option<&ProcessHandle> {
        self.handle.as_ref()
    }

    pub(crate) fn last_exit(&self) -> Option<ExitInfo> {
        self.last_exit
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn output_snapshot(&self) -> Vec<String> {
        match &self.output {
            Some(logs) => match logs.lock() {
                Ok(buffer) => buffer.snapshot(),
                Err(_) => Vec::new(),
            },
            None => Vec::new(),
        }
    }

    /// `Stopped -> Starting`. Returns the new spawn generation.
    pub(crate) fn begin_start(&mut self) -> u64 {
        debug_assert_eq!(self.lifecycle, Lifecycle::Stopped);
        self.lifecycle = Lifecycle::Starting;
        self.generation += 1;
        self.generation
    }

    /// `Starting -> Running` after a successful spawn.
    ///
    /// Clears the previous exit record: `last_exit` describes terminations
    /// since the last successful start.
    pub(crate) fn confirm_running(&mut self, handle: ProcessHandle) {
        debug_assert_eq!(self.lifecycle, Lifecycle::Starting);
        self.output = Some(handle.logs());
        self.handle = Some(handle);
        self.last_exit = None;
        self.lifecycle = Lifecycle::Running;
    }

    /// `Starting -> Stopped` when the spawn call fails.
    ///
    /// The previous exit record is kept; a refused launch is not a
    /// termination.
    pub(crate) fn abort_start(&mut self) {
        debug_assert_eq!(self.lifecycle, Lifecycle::Starting);
        self.lifecycle = Lifecycle::Stopped;
        self.handle = None;
    }

    /// `Starting/Running -> Stopping` when a stop request takes over.
    pub(crate) fn begin_stop(&mut self) {
        debug_assert_ne!(self.lifecycle, Lifecycle::Stopped);
        self.lifecycle = Lifecycle::Stopping;
    }

    /// Any non-`Stopped` state `-> Stopped` once the exit is confirmed,
    /// either by a stop request or by exit reconciliation.
    pub(crate) fn confirm_stopped(&mut self, exit: Option<ExitInfo>) {
        self.lifecycle = Lifecycle::Stopped;
        self.handle = None;
        if exit.is_some() {
            self.last_exit = exit;
        }
    }
}
