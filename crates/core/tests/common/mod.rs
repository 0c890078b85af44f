//! Common test utilities and helpers for supervisor E2E tests.
//!
//! This module provides shared functionality across the integration tests:
//! - Fixtures (catalogs, supervisors with fast stop timings)
//! - Executable test scripts written to scratch directories
//! - Polling helpers for asynchronous state transitions

pub mod fixtures;

pub use fixtures::*;
