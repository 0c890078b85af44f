//! Embedded template files for devkit home initialization.
//!
//! This module uses `rust-embed` to embed files from the repository root
//! `templates/` directory into the binary at compile time, so `devkit init`
//! works without external file dependencies.

use rust_embed::RustEmbed;

/// Embedded template files from the `templates/` directory.
///
/// The path is calculated relative to the crate root:
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../templates` = repository root `templates/`
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

/// Get template file content by path.
///
/// # Example
/// ```
/// use dk_core::init::templates::get_template;
///
/// let config = get_template("config.toml").expect("config.toml should exist");
/// assert!(config.contains("port"));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_template() {
        let config = get_template("config.toml").expect("config.toml should be embedded");
        assert!(config.contains("port"), "config.toml should mention the port setting");
    }

    #[test]
    fn test_get_projects_template() {
        let projects = get_template("projects.json").expect("projects.json should be embedded");
        assert_eq!(projects.trim(), "[]", "catalog template should be an empty array");
    }

    #[test]
    fn test_get_nonexistent_template() {
        assert!(get_template("nonexistent.txt").is_none());
    }
}
