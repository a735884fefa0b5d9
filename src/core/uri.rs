// src/core/uri.rs

//! A small URI splitter for `mpv://open?...` links.
//!
//! Splitting never fails: input without structure yields empty fields and
//! [`Request::parse`](crate::core::request::Request::parse) turns those into
//! the matching error. The query is kept raw so that values are decoded one at
//! a time, after they are looked up.

const SCHEME_SEPARATOR: &str = "://";

/// The four parts of a URI this program cares about.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedUri {
    protocol: String,
    host: String,
    path: String,
    query: String,
}

impl ParsedUri {
    /// Splits `raw` into protocol, host, path and raw query.
    ///
    /// Protocol and host are lower-cased; path and query keep their case. If no
    /// `://` separator exists every field is empty.
    ///
    /// When the segment after `://` runs into the `?` (or the end of input)
    /// before any `/`, as in `mpv://open?url=x`, the segment is taken as both
    /// host and path, so `mpv://open` and `mpv:///open` both have path `/open`.
    pub fn parse(raw: &str) -> Self {
        let Some((protocol, rest)) = raw.split_once(SCHEME_SEPARATOR) else {
            return Self::default();
        };

        let (authority_and_path, query) = match rest.split_once('?') {
            Some((before, after)) => (before, after),
            None => (rest, ""),
        };

        let (host, path) = match authority_and_path.find('/') {
            Some(slash) => {
                let (host, path) = authority_and_path.split_at(slash);
                (host.to_lowercase(), path.to_string())
            }
            // Host-only form: `mpv://open?...`.
            None if !authority_and_path.is_empty() => (
                authority_and_path.to_lowercase(),
                format!("/{}", authority_and_path),
            ),
            None => (String::new(), String::new()),
        };

        Self {
            protocol: protocol.to_lowercase(),
            host,
            path,
            query: query.to_string(),
        }
    }

    /// The scheme, lower-cased (`mpv`).
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// The authority, lower-cased. Usually empty for `mpv:///open`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The path, including its leading `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Everything after the first `?`, still percent-encoded.
    pub fn query(&self) -> &str {
        &self.query
    }
}
