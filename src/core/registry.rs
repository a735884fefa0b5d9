// src/core/registry.rs

//! The table of known players.
//!
//! Adding support for another CLI-driven player means adding one record, either
//! in [`PlayerRegistry::with_defaults`] or in the `[players]` section of
//! `config.toml`.

use crate::{
    constants::DEFAULT_PLAYER,
    models::{AppConfig, PlayerProfile, default_supported_schemes},
};
use std::collections::HashMap;

/// Player profiles keyed by lower-cased identifier.
///
/// Built once at start-up and then only read; requests borrow profiles from it.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: HashMap<String, PlayerProfile>,
}

impl PlayerRegistry {
    /// Creates a registry with no players at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in players (`mpv` and `celluloid`).
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();

        registry.insert(
            "mpv",
            PlayerProfile {
                name: "mpv".to_string(),
                executable: "mpv".to_string(),
                fullscreen: "--fs".to_string(),
                pip: "--ontop --no-border --autofit=384x216 --geometry=98%:98%".to_string(),
                enqueue: String::new(),
                new_window: String::new(),
                needs_ipc: true,
                flag_overrides: HashMap::new(),
                supported_schemes: default_supported_schemes(),
            },
        );

        // Celluloid is a GUI around mpv: mpv flags have to go through --mpv-options.
        registry.insert(
            "celluloid",
            PlayerProfile {
                name: "Celluloid".to_string(),
                executable: "celluloid".to_string(),
                fullscreen: String::new(),
                pip: String::new(),
                enqueue: "--enqueue".to_string(),
                new_window: "--new-window".to_string(),
                needs_ipc: false,
                flag_overrides: HashMap::from([("*".to_string(), "--mpv-options=%s".to_string())]),
                supported_schemes: default_supported_schemes(),
            },
        );

        registry
    }

    /// Creates the default registry and merges the players declared in `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut registry = Self::with_defaults();
        registry.merge(config);
        registry
    }

    /// Adds or replaces the players declared in `config`.
    pub fn merge(&mut self, config: &AppConfig) {
        for (id, player) in &config.players {
            log::debug!("Registering player '{}' from configuration", id);
            self.insert(id, player.clone().into_profile(id));
        }
    }

    /// Adds a profile, replacing any previous one with the same (case-insensitive) id.
    pub fn insert(&mut self, id: &str, profile: PlayerProfile) {
        self.players.insert(id.to_lowercase(), profile);
    }

    /// Looks up a player by identifier, ignoring case.
    ///
    /// The empty identifier resolves to the default player. Unknown identifiers
    /// resolve to `None`; there is no fallback to the default.
    pub fn lookup(&self, identifier: &str) -> Option<&PlayerProfile> {
        let key = if identifier.is_empty() {
            DEFAULT_PLAYER.to_string()
        } else {
            identifier.to_lowercase()
        };
        self.players.get(&key)
    }

    /// Identifiers of all registered players, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.players.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerConfig;

    #[test]
    fn test_default_lookup_is_case_insensitive() {
        let registry = PlayerRegistry::with_defaults();
        let lower = registry.lookup("mpv").unwrap();
        let upper = registry.lookup("MPV").unwrap();
        let empty = registry.lookup("").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower, empty);
        assert_eq!(lower.executable, "mpv");
        assert!(lower.needs_ipc);
    }

    #[test]
    fn test_unknown_player_is_not_substituted() {
        let registry = PlayerRegistry::with_defaults();
        assert!(registry.lookup("vlc").is_none());
        assert!(registry.lookup("mpvx").is_none());
    }

    #[test]
    fn test_celluloid_profile() {
        let registry = PlayerRegistry::with_defaults();
        let celluloid = registry.lookup("Celluloid").unwrap();
        assert_eq!(celluloid.name, "Celluloid");
        assert!(!celluloid.needs_ipc);
        assert!(celluloid.fullscreen.is_empty());
        assert_eq!(celluloid.enqueue, "--enqueue");
        assert_eq!(celluloid.new_window, "--new-window");
        assert_eq!(
            celluloid.flag_overrides.get("*").map(String::as_str),
            Some("--mpv-options=%s")
        );
    }

    #[test]
    fn test_merge_adds_and_replaces_players() {
        let mut config = AppConfig::default();
        config.players.insert(
            "VLC".to_string(),
            PlayerConfig {
                executable: "vlc".to_string(),
                fullscreen: "--fullscreen".to_string(),
                ..Default::default()
            },
        );
        config.players.insert(
            "mpv".to_string(),
            PlayerConfig {
                name: Some("mpv (flatpak)".to_string()),
                executable: "flatpak run io.mpv.Mpv".to_string(),
                needs_ipc: true,
                ..Default::default()
            },
        );

        let registry = PlayerRegistry::from_config(&config);

        let vlc = registry.lookup("vlc").unwrap();
        assert_eq!(vlc.name, "VLC");
        assert_eq!(vlc.fullscreen, "--fullscreen");
        assert!(!vlc.needs_ipc);
        assert_eq!(vlc.supported_schemes, vec!["http", "https"]);

        let mpv = registry.lookup("").unwrap();
        assert_eq!(mpv.executable, "flatpak run io.mpv.Mpv");
        assert!(mpv.fullscreen.is_empty());

        assert_eq!(registry.ids(), vec!["celluloid", "mpv", "vlc"]);
    }

    #[test]
    fn test_builtins_accept_only_web_schemes() {
        let registry = PlayerRegistry::with_defaults();
        for id in registry.ids() {
            let player = registry.lookup(id).unwrap();
            assert_eq!(player.supported_schemes, vec!["http", "https"], "player '{}'", id);
        }
    }

    #[test]
    fn test_empty_registry_has_no_default() {
        assert!(PlayerRegistry::empty().lookup("").is_none());
    }
}
