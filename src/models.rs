// src/models.rs

use crate::constants::DEFAULT_SUPPORTED_SCHEMES;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// --- PLAYER MODELS ---

/// How to invoke a CLI-driven media player.
///
/// Profiles live in a [`PlayerRegistry`](crate::core::registry::PlayerRegistry)
/// and are borrowed by every [`Request`](crate::core::request::Request) that
/// resolves to them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerProfile {
    /// Display name of the player.
    pub name: String,
    /// Executable path or name (if already in `$PATH`).
    pub executable: String,
    /// Flag fragment used when `fullscreen=1`. Empty if unsupported.
    pub fullscreen: String,
    /// Flag fragment used when `pip=1`. Empty if unsupported.
    pub pip: String,
    /// Flag fragment used when `enqueue=1`. Empty if unsupported.
    pub enqueue: String,
    /// Flag fragment used when `new_window=1`. Empty if unsupported.
    pub new_window: String,
    /// Whether enqueuing goes through the player's IPC socket.
    pub needs_ipc: bool,
    /// Rewrites for caller-supplied flags.
    ///
    /// Override syntax:
    /// - `"*"` matches every flag and takes precedence over any other key.
    ///   `{"*" = ""}` voids all flags.
    /// - `"--flag"` matches the flag `--flag` exactly. Unmatched flags are dropped.
    /// - `%s` in a template is replaced with the original flag without its
    ///   leading dashes, e.g. `{"--foo" = "--%s-bar"}` turns `--foo` into `--foo-bar`.
    ///
    /// Options with parameters such as `--foo=bar` are matched as a whole.
    pub flag_overrides: HashMap<String, String>,
    /// URL schemes this player accepts. An empty list accepts none.
    pub supported_schemes: Vec<String>,
}

// --- `config.toml` MODELS (What is read from the configuration file) ---

/// Represents the deserialized structure of a `config.toml` file.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Path of the IPC socket. `~` and environment variables are expanded.
    pub socket: Option<String>,
    /// Extra players, keyed by identifier. They replace built-ins with the same id.
    #[serde(default)]
    pub players: HashMap<String, PlayerConfig>,
}

/// A player table (`[players.<id>]`) in `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfig {
    pub name: Option<String>,
    pub executable: String,
    #[serde(default)]
    pub fullscreen: String,
    #[serde(default)]
    pub pip: String,
    #[serde(default)]
    pub enqueue: String,
    #[serde(default)]
    pub new_window: String,
    #[serde(default)]
    pub needs_ipc: bool,
    #[serde(default)]
    pub flag_overrides: HashMap<String, String>,
    #[serde(default)]
    pub supported_schemes: Vec<String>,
}

impl PlayerConfig {
    /// Turns a config table into a profile. The table key is the fallback display name,
    /// and a table without `supported_schemes` accepts `http` and `https`.
    pub fn into_profile(self, id: &str) -> PlayerProfile {
        let supported_schemes = if self.supported_schemes.is_empty() {
            default_supported_schemes()
        } else {
            self.supported_schemes
        };

        PlayerProfile {
            name: self.name.unwrap_or_else(|| id.to_string()),
            executable: self.executable,
            fullscreen: self.fullscreen,
            pip: self.pip,
            enqueue: self.enqueue,
            new_window: self.new_window,
            needs_ipc: self.needs_ipc,
            flag_overrides: self.flag_overrides,
            supported_schemes,
        }
    }
}

/// The schemes a player accepts when none are configured.
pub fn default_supported_schemes() -> Vec<String> {
    DEFAULT_SUPPORTED_SCHEMES
        .iter()
        .map(|scheme| scheme.to_string())
        .collect()
}
