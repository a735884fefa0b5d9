// src/cli/handlers/open.rs

use anyhow::{Context, Result};
use colored::*;
use std::{env, time::Duration};

use crate::{
    cli::Cli,
    constants::IPC_WRITE_TIMEOUT_SECS,
    core::{
        config_loader::{self, ConfigError, LoadedConfig},
        registry::PlayerRegistry,
        request::Request,
    },
    system::{
        executor::{ExecutionError, Launcher, ProcessLauncher},
        ipc::{ControlChannel, UnixSocketChannel},
    },
};

/// How a request was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The running player accepted the IPC command.
    Enqueued,
    /// A new player process was started.
    Launched,
}

/// The main handler for `open-in-mpv <mpv://...>`.
pub fn handle(uri: &str, cli: &Cli) -> Result<()> {
    // 1. Build the registry from the built-ins and the optional config file.
    let cwd = env::current_dir().context("Could not determine the current directory")?;
    let loaded = resolve_config(uri, config_loader::load_config(cli.config.as_deref(), &cwd))?;
    let registry = PlayerRegistry::from_config(&loaded.config);

    // 2. Parse the URI. Errors here are fatal: the caller sent a bad link.
    let request = Request::parse(uri, &registry)?;

    // 3. Hand the request to the running player, or start a new one.
    let socket = loaded.socket_path(cli.socket.as_deref())?;
    let channel = UnixSocketChannel::new(&socket, Duration::from_secs(IPC_WRITE_TIMEOUT_SECS));

    if dispatch(&request, &channel, &ProcessLauncher)? == Outcome::Enqueued {
        println!(
            "{}",
            format!(
                t!("open.info.enqueued"),
                url = request.target_url(),
                socket = socket.display()
            )
            .green()
        );
    }

    Ok(())
}

/// Unwraps the loaded configuration.
///
/// When the configuration is broken, the link is still checked against the
/// built-in players so that a bad link is reported along with the config error.
fn resolve_config(uri: &str, loaded: Result<LoadedConfig, ConfigError>) -> Result<LoadedConfig> {
    let config_err = match loaded {
        Ok(loaded) => return Ok(loaded),
        Err(e) => e,
    };

    match Request::parse(uri, &PlayerRegistry::with_defaults()) {
        Ok(_) => Err(config_err.into()),
        Err(parse_err) => Err(anyhow::Error::new(config_err).context(parse_err.to_string())),
    }
}

/// Serves a parsed request.
///
/// Players that need IPC are first offered the payload over `channel`; if that
/// write fails, or the player does not use IPC, the command line is run through
/// `launcher`. The IPC write is attempted once, never retried.
pub fn dispatch(
    request: &Request<'_>,
    channel: &dyn ControlChannel,
    launcher: &dyn Launcher,
) -> Result<Outcome, ExecutionError> {
    if request.needs_ipc() {
        let payload = request.build_ipc_payload();
        log::debug!("IPC payload: {}", payload.trim_end());

        match channel.send(payload.as_bytes()) {
            Ok(()) => return Ok(Outcome::Enqueued),
            Err(e) => {
                log::debug!("IPC write failed: {}", e);
                eprintln!("{}", t!("open.warn.ipc_fallback").yellow());
            }
        }
    }

    let command = request.build_cli_command();
    log::info!(
        "{}",
        format!(t!("open.info.launching"), command = command)
    );
    launcher.launch(&command)?;

    Ok(Outcome::Launched)
}
