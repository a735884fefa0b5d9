// src/system/desktop.rs

use crate::constants::DESKTOP_ENTRY;
use std::{fs, io::Write, path::Path};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DesktopError {
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error with temporary file: {0}")]
    TempFile(#[from] tempfile::PersistError),
    #[error("Desktop entry path '{0}' has no parent directory.")]
    NoParent(String),
}

/// Outcome of [`uninstall_desktop_entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    NotInstalled,
}

/// Writes the `x-scheme-handler/mpv` desktop entry at `path`.
///
/// The parent directory is created if needed and the file is replaced
/// atomically, so a concurrent desktop database update never sees half a file.
pub fn install_desktop_entry(path: &Path) -> Result<(), DesktopError> {
    let dir = path
        .parent()
        .ok_or_else(|| DesktopError::NoParent(path.display().to_string()))?;
    fs::create_dir_all(dir)?;

    let mut temp_file = NamedTempFile::with_prefix_in(".open-in-mpv-", dir)?;
    temp_file.write_all(DESKTOP_ENTRY.as_bytes())?;
    temp_file.flush()?;
    temp_file.persist(path)?;

    log::debug!("Desktop entry written to {}", path.display());
    Ok(())
}

/// Deletes the desktop entry at `path`. A missing file is not an error.
pub fn uninstall_desktop_entry(path: &Path) -> Result<Removal, DesktopError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(Removal::Removed),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Removal::NotInstalled),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_install_creates_directories_and_entry() {
        let root = tempdir().unwrap();
        let path = root.path().join("share/applications/open-in-mpv.desktop");

        install_desktop_entry(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[Desktop Entry]\n"));
        assert!(content.contains("Exec=open-in-mpv %u\n"));
        assert!(content.contains("MimeType=x-scheme-handler/mpv\n"));
    }

    #[test]
    fn test_install_overwrites_existing_entry() {
        let root = tempdir().unwrap();
        let path = root.path().join("open-in-mpv.desktop");
        fs::write(&path, "stale").unwrap();

        install_desktop_entry(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), DESKTOP_ENTRY);
        // No temporary files left behind.
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_uninstall() {
        let root = tempdir().unwrap();
        let path = root.path().join("open-in-mpv.desktop");

        assert_eq!(uninstall_desktop_entry(&path).unwrap(), Removal::NotInstalled);

        install_desktop_entry(&path).unwrap();
        assert_eq!(uninstall_desktop_entry(&path).unwrap(), Removal::Removed);
        assert!(!path.exists());
    }
}
