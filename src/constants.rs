// src/constants.rs

//! Well-known names and paths shared across the crate.

/// The scheme this program is registered for.
pub const PROTOCOL: &str = "mpv";

/// The only method understood in `mpv://<method>?...` URIs.
pub const OPEN_METHOD: &str = "/open";

/// Identifier of the player used when the URI does not name one.
pub const DEFAULT_PLAYER: &str = "mpv";

/// Target URL schemes accepted by players that do not configure their own.
pub const DEFAULT_SUPPORTED_SCHEMES: &[&str] = &["http", "https"];

/// Default path of the IPC socket a running mpv listens on
/// (`--input-ipc-server=/tmp/mpvsocket`).
pub const DEFAULT_SOCKET: &str = "/tmp/mpvsocket";

/// Seconds to wait for the IPC write before giving up and launching a new player.
pub const IPC_WRITE_TIMEOUT_SECS: u64 = 2;

/// The name of the directory holding the configuration (inside the system config dir).
pub const CONFIG_DIR_NAME: &str = "open-in-mpv";

/// The name of the configuration file.
pub const CONFIG_FILENAME: &str = "config.toml";

/// The name of the XDG desktop entry that registers the scheme handler.
pub const DESKTOP_ENTRY_FILENAME: &str = "open-in-mpv.desktop";

/// Contents of the desktop entry written by `install-protocol`.
pub const DESKTOP_ENTRY: &str = "[Desktop Entry]
Name=open-in-mpv
Exec=open-in-mpv %u
Type=Application
Terminal=false
NoDisplay=true
MimeType=x-scheme-handler/mpv
";
