//! # System Interaction Layer
//!
//! The OS-facing collaborators of the core. The core never reaches these
//! directly; the `open` handler wires them together.
//!
//! ## Modules
//!
//! - **`executor`**: splits a command line with `shlex` and spawns the player
//!   as a detached process (`Launcher`).
//! - **`ipc`**: one-shot writes to a running player's JSON-IPC Unix socket
//!   (`ControlChannel`).
//! - **`desktop`**: installs and removes the XDG desktop entry that registers
//!   this program as the `mpv://` handler.

pub mod desktop;
pub mod executor;
pub mod ipc;
