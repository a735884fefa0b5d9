// src/core/request.rs

use crate::{
    constants::{DEFAULT_PLAYER, OPEN_METHOD, PROTOCOL},
    core::{
        commons::quote_for_shell,
        overrides::apply_overrides,
        query::{DecodeError, percent_decode, query_value, query_value_or},
        registry::PlayerRegistry,
        uri::ParsedUri,
    },
    models::PlayerProfile,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unsupported protocol supplied: '{0}'")]
    UnsupportedProtocol(String),
    #[error("Unsupported method supplied: '{0}'")]
    UnsupportedMethod(String),
    #[error("Empty query")]
    EmptyQuery,
    #[error("Unsupported player: '{0}'")]
    UnsupportedPlayer(String),
    #[error("Could not decode the '{field}' value: {source}")]
    Decode {
        field: &'static str,
        #[source]
        source: DecodeError,
    },
    #[error("No 'url' value in the query")]
    MissingUrl,
    #[error("Refusing a target URL that looks like a command-line option: '{0}'")]
    OptionLikeUrl(String),
    #[error(
        "Unsupported scheme for player '{player}': '{scheme}'. Did you forget to add it in the configuration?"
    )]
    UnsupportedScheme { player: String, scheme: String },
}

/// The decoded intent of one `mpv://open?...` invocation.
///
/// A request borrows its player profile from the [`PlayerRegistry`] it was
/// parsed against, so it cannot outlive the registry. It is never mutated after
/// [`Request::parse`] returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request<'r> {
    target_url: String,
    raw_flags: String,
    player: Option<&'r PlayerProfile>,
    fullscreen: bool,
    pip: bool,
    enqueue: bool,
    new_window: bool,
}

impl<'r> Request<'r> {
    /// Parses a `mpv://open?url=...` URI and resolves its player in `registry`.
    ///
    /// # Errors
    /// Checks run in order: protocol, method, empty query, player, then the
    /// `url`/`flags` values (decoding, presence, no leading `-`, accepted scheme).
    pub fn parse(uri: &str, registry: &'r PlayerRegistry) -> Result<Self, ParseError> {
        let parsed = ParsedUri::parse(uri);

        if parsed.protocol() != PROTOCOL {
            return Err(ParseError::UnsupportedProtocol(parsed.protocol().to_string()));
        }

        if parsed.path() != OPEN_METHOD {
            return Err(ParseError::UnsupportedMethod(parsed.path().to_string()));
        }

        let query = parsed.query();
        if query.is_empty() {
            return Err(ParseError::EmptyQuery);
        }

        let player_id = query_value_or(query, "player", DEFAULT_PLAYER);
        let player = registry
            .lookup(player_id)
            .ok_or_else(|| ParseError::UnsupportedPlayer(player_id.to_string()))?;

        let target_url = decode_field(query, "url")?;
        if target_url.is_empty() {
            return Err(ParseError::MissingUrl);
        }
        if target_url.starts_with('-') {
            return Err(ParseError::OptionLikeUrl(target_url));
        }
        check_scheme(player, &target_url)?;

        let request = Self {
            target_url,
            raw_flags: decode_field(query, "flags")?,
            player: Some(player),
            fullscreen: is_enabled(query, "fullscreen"),
            pip: is_enabled(query, "pip"),
            enqueue: is_enabled(query, "enqueue"),
            new_window: is_enabled(query, "new_window"),
        };
        log::debug!("Parsed request: {:?}", request);

        Ok(request)
    }

    /// Builds the command line that launches a new player for this request.
    ///
    /// Tokens, in order: executable, fullscreen, pip, enqueue and new-window
    /// flags (each only when requested and supported by the player), caller flags
    /// (rewritten through the player's overrides, if it has any) and the target
    /// URL, shell-quoted. Returns an empty string if no player was resolved.
    pub fn build_cli_command(&self) -> String {
        let Some(player) = self.player else {
            return String::new();
        };

        let mut tokens: Vec<String> = vec![player.executable.clone()];

        if self.fullscreen && !player.fullscreen.is_empty() {
            tokens.push(player.fullscreen.clone());
        }

        if self.pip && !player.pip.is_empty() {
            tokens.push(player.pip.clone());
        }

        if self.enqueue && !player.enqueue.is_empty() {
            tokens.push(player.enqueue.clone());
        }

        if self.new_window && !player.new_window.is_empty() {
            tokens.push(player.new_window.clone());
        }

        let flags = if player.flag_overrides.is_empty() {
            self.raw_flags.clone()
        } else {
            apply_overrides(&self.raw_flags, &player.flag_overrides)
        };
        if !flags.trim().is_empty() {
            tokens.push(flags);
        }

        tokens.push(quote_for_shell(&self.target_url).into_owned());

        tokens.join(" ")
    }

    /// Builds the line that enqueues the target in a running player over IPC.
    ///
    /// Syntax: `{"command": ["loadfile", "<url>", "append-play"]}` plus a
    /// newline, with `<url>` JSON-escaped. Empty if the player does not use IPC.
    pub fn build_ipc_payload(&self) -> String {
        if !self.needs_ipc() {
            return String::new();
        }

        // Serializing a `str` cannot fail.
        let url = serde_json::to_string(&self.target_url)
            .unwrap_or_else(|_| format!("\"{}\"", self.target_url));

        format!("{{\"command\": [\"loadfile\", {}, \"append-play\"]}}\n", url)
    }

    /// Whether this request should first be offered to a running player over IPC.
    ///
    /// Depends only on the resolved player, never on `enqueue=1`.
    pub fn needs_ipc(&self) -> bool {
        self.player.is_some_and(|p| p.needs_ipc)
    }

    /// The percent-decoded media URL.
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// The percent-decoded caller flags, before any override.
    pub fn raw_flags(&self) -> &str {
        &self.raw_flags
    }

    /// The resolved player profile.
    pub fn player(&self) -> Option<&'r PlayerProfile> {
        self.player
    }

    /// `fullscreen=1`.
    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// `pip=1`.
    pub fn pip(&self) -> bool {
        self.pip
    }

    /// `enqueue=1`.
    pub fn enqueue(&self) -> bool {
        self.enqueue
    }

    /// `new_window=1`.
    pub fn new_window(&self) -> bool {
        self.new_window
    }
}

/// Extracts and percent-decodes a query value. Absent keys decode to "".
fn decode_field(query: &str, field: &'static str) -> Result<String, ParseError> {
    let raw = query_value(query, field).unwrap_or_default();
    percent_decode(raw).map_err(|source| ParseError::Decode { field, source })
}

/// Boolean query values are true only when exactly "1".
fn is_enabled(query: &str, key: &str) -> bool {
    query_value(query, key) == Some("1")
}

/// Validates the target's scheme against the player's allow-list.
/// An empty list accepts nothing; a target without a scheme never passes.
fn check_scheme(player: &PlayerProfile, target_url: &str) -> Result<(), ParseError> {
    let scheme = url_scheme(target_url).unwrap_or_default().to_lowercase();
    let supported = player
        .supported_schemes
        .iter()
        .any(|s| s.eq_ignore_ascii_case(&scheme));

    if supported {
        Ok(())
    } else {
        Err(ParseError::UnsupportedScheme {
            player: player.name.clone(),
            scheme,
        })
    }
}

/// Returns the scheme of `url` (`https` in `https://...`), if it has a valid one.
fn url_scheme(url: &str) -> Option<&str> {
    let (scheme, _) = url.split_once(':')?;
    let mut chars = scheme.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let valid = starts_with_letter
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}
