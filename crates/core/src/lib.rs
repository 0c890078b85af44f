//! # dk-core
//!
//! Supervisor core and project registry for devkit.
//!
//! This crate provides:
//! - Project catalog loading from `~/.devkit/projects.json`
//! - Global configuration loading from `~/.devkit/config.toml`
//! - The `ProjectSupervisor`: per-project lifecycle state machine, child
//!   process spawning/termination, and exit reconciliation
//! - Home directory initialization
//!
//! ## Modules
//!
//! - [`config`]: Configuration and home directory resolution
//! - [`registry`]: Immutable project catalog and its on-disk store
//! - [`supervisor`]: Lifecycle state machine and process handling
//! - [`init`]: `~/.devkit` structure generation

pub mod config;
pub mod init;
pub mod registry;
pub mod supervisor;
