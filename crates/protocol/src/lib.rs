//! # dk-protocol
//!
//! Core protocol definitions and data models for devkit.
//!
//! This crate defines all shared data structures used for:
//! - Project catalog parsing (`projects.json`)
//! - Global configuration (`config.toml`)
//! - Runtime lifecycle state tracking
//! - The HTTP API contract between server and dashboard client
//!
//! ## Modules
//!
//! - [`project_models`]: Project catalog entries
//! - [`config_models`]: Global configuration from config.toml
//! - [`state_models`]: Lifecycle state, exit records, status snapshots
//! - [`api_models`]: HTTP request/response shapes
//!
//! ## Design Principles
//!
//! - Minimal dependencies: only serde, ts-rs, and chrono
//! - TypeScript generation: all types derive `TS` for client compatibility
//! - Independent compilation: no dependencies on other devkit crates

pub mod api_models;
pub mod config_models;
pub mod project_models;
pub mod state_models;

// Re-export all public types for convenience
pub use api_models::*;
pub use config_models::*;
pub use project_models::*;
pub use state_models::*;
