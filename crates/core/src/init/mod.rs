//! Initialization module for creating the `~/.devkit` home directory.
//!
//! Generates the files devkit needs to run:
//! - `config.toml`: global settings with documented defaults
//! - `projects.json`: an empty project catalog
//!
//! # Example
//!
//! ```no_run
//! use dk_core::init::{generate_devkit_home, InitOptions};
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     home: PathBuf::from("/home/me/.devkit"),
//!     force: false,
//! };
//!
//! generate_devkit_home(&options)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

pub use error::{InitError, InitResult};
pub use generator::{generate_devkit_home, InitOptions};
pub use templates::get_template;
