// src/system/ipc.rs

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IpcError {
    #[error("Could not connect to IPC socket '{path}': {source}")]
    Connect {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not write to IPC socket '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("IPC sockets are not supported on this platform")]
    Unsupported,
}

/// A one-shot, write-only channel to a running player.
pub trait ControlChannel {
    /// Delivers one newline-terminated command. No response is read.
    fn send(&self, payload: &[u8]) -> Result<(), IpcError>;
}

/// The JSON-IPC Unix socket of a running mpv (`--input-ipc-server`).
///
/// Each [`send`](ControlChannel::send) connects, writes one line and closes
/// the connection.
#[derive(Debug, Clone)]
pub struct UnixSocketChannel {
    path: PathBuf,
    write_timeout: std::time::Duration,
}

impl UnixSocketChannel {
    /// A channel to the socket at `path`, giving up on writes after `write_timeout`.
    pub fn new(path: impl Into<PathBuf>, write_timeout: std::time::Duration) -> Self {
        Self {
            path: path.into(),
            write_timeout,
        }
    }

    /// The socket path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(unix)]
impl ControlChannel for UnixSocketChannel {
    fn send(&self, payload: &[u8]) -> Result<(), IpcError> {
        use std::io::Write;
        use std::os::unix::net::UnixStream;

        let path = self.path.display().to_string();
        let mut stream = UnixStream::connect(&self.path).map_err(|source| IpcError::Connect {
            path: path.clone(),
            source,
        })?;
        // A failing timeout setup only loses the bound, not the write.
        if let Err(e) = stream.set_write_timeout(Some(self.write_timeout)) {
            log::debug!("Could not set IPC write timeout: {}", e);
        }

        let write = |stream: &mut UnixStream, bytes: &[u8]| {
            stream.write_all(bytes).map_err(|source| IpcError::Write {
                path: path.clone(),
                source,
            })
        };

        write(&mut stream, payload)?;
        // The command has to be newline terminated.
        if !payload.ends_with(b"\n") {
            write(&mut stream, b"\n")?;
        }
        log::debug!("Sent {} bytes to '{}'", payload.len(), path);

        Ok(())
    }
}

#[cfg(not(unix))]
impl ControlChannel for UnixSocketChannel {
    fn send(&self, _payload: &[u8]) -> Result<(), IpcError> {
        Err(IpcError::Unsupported)
    }
}
