//! # open-in-mpv
//!
//! A handler for the `mpv://` URI scheme. The binary receives a single
//! `mpv://open?url=...` argument and either enqueues the URL in a running
//! player through its IPC socket or launches a new player process.
//!
//! The library exposes the pieces of that pipeline so they can be reused and
//! tested in isolation:
//!
//! - [`core`]: URI parsing, query decoding, the player registry, flag
//!   overrides and the [`core::request::Request`] model.
//! - [`system`]: the OS-facing collaborators (process launcher, IPC socket,
//!   desktop entry installation).
//! - [`cli`]: argument parsing and the command handlers used by the binary.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;
