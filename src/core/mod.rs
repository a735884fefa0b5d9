// src/core/mod.rs

//! # Core
//!
//! Everything between the raw `mpv://` string and the two artifacts handed to
//! the OS: a command line and an IPC payload. Nothing in here touches sockets
//! or spawns processes.
//!
//! Data flow: `uri` → `query` (per field) → `request` (using `registry` and
//! `overrides`) → command line | IPC line.

pub mod commons;
pub mod config_loader;
pub mod overrides;
pub mod paths;
pub mod query;
pub mod registry;
pub mod request;
pub mod uri;
