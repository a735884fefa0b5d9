// src/cli/handlers/protocol.rs

use anyhow::Result;
use colored::*;

use crate::{
    cli::Cli,
    core::paths,
    system::desktop::{self, Removal},
};

/// Handles `open-in-mpv install-protocol`: writes the user's desktop entry
/// for `x-scheme-handler/mpv`.
pub fn handle_install(_cli: &Cli) -> Result<()> {
    let entry_path = paths::get_desktop_entry_path()?;
    desktop::install_desktop_entry(&entry_path)?;

    println!(
        "{}",
        format!(t!("protocol.success.installed"), path = entry_path.display()).green()
    );
    if let Some(dir) = entry_path.parent() {
        println!(
            "{}",
            format!(t!("protocol.hint.update_db"), dir = dir.display()).dimmed()
        );
    }
    Ok(())
}

/// Handles `open-in-mpv uninstall-protocol`.
pub fn handle_uninstall(_cli: &Cli) -> Result<()> {
    let entry_path = paths::get_desktop_entry_path()?;

    match desktop::uninstall_desktop_entry(&entry_path)? {
        Removal::Removed => println!(
            "{}",
            format!(t!("protocol.success.removed"), path = entry_path.display()).green()
        ),
        Removal::NotInstalled => println!(
            "{}",
            format!(t!("protocol.info.not_installed"), path = entry_path.display()).yellow()
        ),
    }
    Ok(())
}
