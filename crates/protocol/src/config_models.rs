//! Global configuration models for `~/.devkit/config.toml`.
//!
//! This module defines the structure of the global configuration file that
//! controls the dashboard server and child process handling.

use serde::Deserialize;
use serde::Serialize;
use ts_rs::TS;

fn default_port() -> u16 {
    8080
}

fn default_grace_period_secs() -> u64 {
    5
}

fn default_kill_ceiling_secs() -> u64 {
    5
}

fn default_log_buffer_lines() -> usize {
    500
}

/// Represents global settings from `~/.devkit/config.toml`.
///
/// Every field has a default, so a missing or empty file yields a usable
/// configuration.
///
/// # Example
///
/// ```toml
/// # ~/.devkit/config.toml
/// port = 8080
/// grace_period_secs = 5
/// kill_ceiling_secs = 5
/// log_buffer_lines = 500
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct GlobalConfig {
    /// TCP port the dashboard server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Seconds to wait for a child to exit after the graceful signal
    /// before escalating to a forceful kill.
    #[serde(default = "default_grace_period_secs")]
    pub grace_period_secs: u64,

    /// Additional seconds to wait for exit confirmation after the forceful
    /// kill. When this ceiling elapses the stop reports a timeout and the
    /// project stays in `Stopping` until reconciliation resolves it.
    #[serde(default = "default_kill_ceiling_secs")]
    pub kill_ceiling_secs: u64,

    /// Maximum captured output lines retained per project.
    ///
    /// Zero discards child output entirely.
    #[serde(default = "default_log_buffer_lines")]
    pub log_buffer_lines: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            grace_period_secs: default_grace_period_secs(),
            kill_ceiling_secs: default_kill_ceiling_secs(),
            log_buffer_lines: default_log_buffer_lines(),
        }
    }
}
