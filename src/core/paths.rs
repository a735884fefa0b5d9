// src/core/paths.rs

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILENAME, DESKTOP_ENTRY_FILENAME};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    #[error("Could not find system data directory.")]
    DataDirNotFound,
    #[error("Failed to expand path template '{template}': {message}")]
    Expansion { template: String, message: String },
}

/// Returns the path to the open-in-mpv configuration directory (`~/.config/open-in-mpv`).
///
/// The directory is not created: the configuration file is optional.
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or(PathError::ConfigDirNotFound)
}

/// Candidate locations of `config.toml`, in lookup order:
/// the working directory first, then the user configuration directory.
pub fn config_file_candidates(cwd: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![cwd.join(CONFIG_FILENAME)];
    match get_config_dir() {
        Ok(dir) => candidates.push(dir.join(CONFIG_FILENAME)),
        Err(e) => log::debug!("Skipping user config location: {}", e),
    }
    candidates
}

/// Returns the XDG applications directory (`~/.local/share/applications`).
pub fn get_applications_dir() -> Result<PathBuf, PathError> {
    dirs::data_dir()
        .map(|dir| dir.join("applications"))
        .ok_or(PathError::DataDirNotFound)
}

/// Returns the path of the desktop entry that registers the `mpv` scheme.
pub fn get_desktop_entry_path() -> Result<PathBuf, PathError> {
    get_applications_dir().map(|dir| dir.join(DESKTOP_ENTRY_FILENAME))
}

/// Expands `~` and environment variables (`$VAR`, `${VAR}`) in a path template.
pub fn expand_path_template(template: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(template).map_err(|e| PathError::Expansion {
        template: template.to_string(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}
