// src/system/executor.rs

use std::io::ErrorKind;
use std::process::{Command as StdCommand, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command could not be parsed: {0}")]
    CommandParse(String),
    #[error("No command specified to run.")]
    EmptyCommand,
    #[error("Player executable '{0}' was not found. Is it installed and in your PATH?")]
    NotFound(String),
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
}

/// Starts a player from a command line.
pub trait Launcher {
    /// Starts `command_line` and returns as soon as the process exists.
    fn launch(&self, command_line: &str) -> Result<(), ExecutionError>;
}

/// Spawns real, detached processes.
///
/// The command line is split with `shlex` and executed directly, without a
/// shell in between. The child's standard streams go to `/dev/null` and its
/// exit status is never collected.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, command_line: &str) -> Result<(), ExecutionError> {
        let pid = spawn_detached(command_line)?;
        log::debug!("Spawned player process (PID: {})", pid);
        Ok(())
    }
}

/// Splits a command line into program and arguments.
pub fn split_command_line(command_line: &str) -> Result<(String, Vec<String>), ExecutionError> {
    let trimmed_command = command_line.trim();
    if trimmed_command.is_empty() {
        return Err(ExecutionError::EmptyCommand);
    }

    let mut parts = shlex::split(trimmed_command)
        .ok_or_else(|| ExecutionError::CommandParse(trimmed_command.to_string()))?
        .into_iter();
    let program = parts.next().ok_or(ExecutionError::EmptyCommand)?;

    Ok((program, parts.collect()))
}

/// Spawns `command_line` without waiting for it. Returns the child's PID.
pub fn spawn_detached(command_line: &str) -> Result<u32, ExecutionError> {
    let (program, args) = split_command_line(command_line)?;
    log::debug!("Spawning '{}' with args {:?}", program, args);

    let child = StdCommand::new(&program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExecutionError::NotFound(program.clone()),
            _ => ExecutionError::CommandFailed(command_line.trim().to_string(), e),
        })?;

    Ok(child.id())
}
