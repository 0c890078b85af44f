//! Error types for supervisor operations.
//!
//! Every failure mode a caller can observe maps to exactly one variant, so
//! the API layer can always distinguish "succeeded", "definitely failed,
//! safe to retry", and "uncertain, do not assume stopped".

use crate::supervisor::handle::SpawnError;
use thiserror::Error;

/// Errors returned by [`crate::supervisor::ProjectSupervisor`] operations.
#[derive(Error, Debug)]
pub enum SupervisorError {
    /// The name is not in the registry. Always a client error; never
    /// retried.
    #[error("Unknown project: {name}")]
    UnknownProject { name: String },

    /// The OS refused to launch the child. The project remains `Stopped`;
    /// not retried automatically.
    #[error("Failed to start project '{name}': {source}")]
    SpawnFailed {
        name: String,
        #[source]
        source: SpawnError,
    },

    /// Graceful and forceful termination both failed to confirm the exit
    /// within the hard ceiling. The project stays `Stopping` until a later
    /// reconciliation or retried stop resolves it; it is never reported
    /// `Stopped` on a guess.
    #[error("Project '{name}' did not confirm exit within the stop ceiling")]
    StopTimeout { name: String },

    /// A start was requested while an earlier stop is still unconfirmed.
    /// Spawning now could produce a second live child for the name.
    #[error("Project '{name}' has an unconfirmed stop in flight; retry stop first")]
    StopPending { name: String },
}

/// Type alias for Result with SupervisorError.
pub type SupervisorResult<T> = Result<T, SupervisorError>;
