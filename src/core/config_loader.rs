//! # Config Loader
//!
//! Finds and reads the optional `config.toml`. Nothing here is required to run:
//! without a file the built-in players and the default socket are used.
use crate::{
    constants::DEFAULT_SOCKET,
    core::paths::{self, PathError},
    models::AppConfig,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Path(#[from] PathError),
}

/// The configuration together with the file it came from, if any.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// The IPC socket path: `override_path` first, then the config file, then the default.
    pub fn socket_path(&self, override_path: Option<&str>) -> Result<PathBuf, ConfigError> {
        let template = override_path
            .or(self.config.socket.as_deref())
            .unwrap_or(DEFAULT_SOCKET);
        Ok(paths::expand_path_template(template)?)
    }
}

/// Loads the configuration.
///
/// With `explicit`, that file must exist. Otherwise the first existing candidate
/// from [`paths::config_file_candidates`] is used, or the defaults if none exists.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, ConfigError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => paths::config_file_candidates(cwd)
            .into_iter()
            .find(|candidate| candidate.is_file()),
    };

    let Some(path) = path else {
        log::debug!("No config file found, using defaults");
        return Ok(LoadedConfig::default());
    };

    log::debug!("Loading config from '{}'", path.display());
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config = parse_config(&content).map_err(|source| ConfigError::TomlParse {
        path: path.display().to_string(),
        source,
    })?;

    Ok(LoadedConfig {
        config,
        source: Some(path),
    })
}

/// Parses the contents of a `config.toml`.
pub fn parse_config(content: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    const SAMPLE: &str = r#"
        socket = "/run/user/1000/mpv.sock"

        [players.vlc]
        name = "VLC"
        executable = "vlc"
        fullscreen = "--fullscreen"
        supported_schemes = ["http", "https"]

        [players.vlc.flag_overrides]
        "*" = "--%s"
    "#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.socket.as_deref(), Some("/run/user/1000/mpv.sock"));

        let vlc = config.players.get("vlc").unwrap();
        assert_eq!(vlc.name.as_deref(), Some("VLC"));
        assert_eq!(vlc.executable, "vlc");
        assert!(vlc.pip.is_empty());
        assert!(!vlc.needs_ipc);
        assert_eq!(vlc.supported_schemes, vec!["http", "https"]);
        assert_eq!(vlc.flag_overrides.get("*").map(String::as_str), Some("--%s"));
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let toml_str = r#"
            [players.vlc]
            executable = "vlc"
            needs_icp = true # Typo: should be `needs_ipc`
        "#;
        let error_msg = parse_config(toml_str).unwrap_err().to_string();
        assert!(
            error_msg.contains("unknown field `needs_icp`"),
            "Error message was: {}",
            error_msg
        );
    }

    #[test]
    fn test_parse_requires_executable() {
        let result = parse_config("[players.vlc]\nname = \"VLC\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        file.flush().unwrap();

        let cwd = tempdir().unwrap();
        let loaded = load_config(Some(file.path()), cwd.path()).unwrap();
        assert_eq!(loaded.source.as_deref(), Some(file.path()));
        assert!(loaded.config.players.contains_key("vlc"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let cwd = tempdir().unwrap();
        let missing = cwd.path().join("nope.toml");
        let result = load_config(Some(&missing), cwd.path());
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_from_working_directory() {
        let cwd = tempdir().unwrap();
        fs::write(cwd.path().join("config.toml"), "socket = \"/tmp/other\"\n").unwrap();

        let loaded = load_config(None, cwd.path()).unwrap();
        assert_eq!(loaded.source, Some(cwd.path().join("config.toml")));
        assert_eq!(
            loaded.socket_path(None).unwrap(),
            PathBuf::from("/tmp/other")
        );
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let cwd = tempdir().unwrap();
        fs::write(cwd.path().join("config.toml"), "socket = [").unwrap();
        assert!(matches!(
            load_config(None, cwd.path()),
            Err(ConfigError::TomlParse { .. })
        ));
    }

    #[test]
    fn test_socket_path_precedence() {
        let loaded = LoadedConfig::default();
        assert_eq!(loaded.socket_path(None).unwrap(), PathBuf::from("/tmp/mpvsocket"));
        assert_eq!(
            loaded.socket_path(Some("/tmp/cli")).unwrap(),
            PathBuf::from("/tmp/cli")
        );

        let loaded = LoadedConfig {
            config: AppConfig {
                socket: Some("/tmp/from-config".to_string()),
                ..Default::default()
            },
            source: None,
        };
        assert_eq!(loaded.socket_path(None).unwrap(), PathBuf::from("/tmp/from-config"));
        assert_eq!(
            loaded.socket_path(Some("/tmp/cli")).unwrap(),
            PathBuf::from("/tmp/cli")
        );
    }
}
