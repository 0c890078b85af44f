//! Devkit home directory generation.

use super::error::{InitError, InitResult};
use super::templates::get_template;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for initializing a devkit home directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Target home directory (normally `~/.devkit`).
    pub home: PathBuf,

    /// Overwrite an existing home directory.
    pub force: bool,
}

/// Generate the devkit home structure:
///
/// ```text
/// ~/.devkit/
/// ├── config.toml
/// └── projects.json
/// ```
///
/// # Errors
///
/// Returns an `InitError` if the home already exists (without force), a
/// template is missing from the embedded assets, or a filesystem operation
/// fails.
pub fn generate_devkit_home(options: &InitOptions) -> InitResult<()> {
    if options.home.exists() && !options.force {
        return Err(InitError::DirectoryExists(options.home.clone()));
    }

    fs::create_dir_all(&options.home).map_err(|source| InitError::DirectoryCreate {
        path: options.home.clone(),
        source,
    })?;

    write_template_file(&options.home, "config.toml")?;
    write_template_file(&options.home, "projects.json")?;

    Ok(())
}

fn write_template_file(home: &Path, template_path: &str) -> InitResult<()> {
    let content = get_template(template_path)
        .ok_or_else(|| InitError::TemplateNotFound(template_path.to_string()))?;

    let target_path = home.join(template_path);
    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path,
        source,
    })
}
