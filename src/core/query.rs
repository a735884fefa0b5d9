// src/core/query.rs

use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed percent-escape '{sequence}' at byte {position}")]
    MalformedEscape { position: usize, sequence: String },
    #[error("Percent-decoded value is not valid UTF-8")]
    InvalidUtf8,
}

/// Gets a value from a raw query string given a key.
///
/// The LAST occurrence of `key=` wins, so `a=1&a=2` yields `2` for `a`. The value
/// runs up to the next `&` or the end of the query. The match is a plain substring
/// search on the undecoded query, and the value is returned still percent-encoded.
pub fn query_value<'q>(query: &'q str, key: &str) -> Option<&'q str> {
    let needle = format!("{}=", key);
    let pos = query.rfind(&needle)?;
    let offset = pos + needle.len();

    let end = query
        .get(pos..)
        .and_then(|from_match| from_match.find('&'))
        .map_or(query.len(), |amp| pos + amp);

    // `end` can only precede `offset` if the key itself contains '&'.
    query.get(offset..end.max(offset))
}

/// Same as [`query_value`], returning `fallback` when the key is absent or its value empty.
pub fn query_value_or<'q>(query: &'q str, key: &str, fallback: &'q str) -> &'q str {
    match query_value(query, key) {
        Some(value) if !value.is_empty() => value,
        _ => fallback,
    }
}

/// Percent-decodes a string.
///
/// Every `%XX` triplet (hex digits in either case) becomes the byte it encodes,
/// anything else is copied verbatim. `+` is left alone. A `%` that is not
/// followed by two hex digits is rejected rather than passed through.
pub fn percent_decode(encoded: &str) -> Result<String, DecodeError> {
    check_escapes(encoded)?;

    percent_decode_str(encoded)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| DecodeError::InvalidUtf8)
}

/// Finds the first `%` not followed by two hex digits.
fn check_escapes(encoded: &str) -> Result<(), DecodeError> {
    let src = encoded.as_bytes();

    for (position, _) in src.iter().enumerate().filter(|(_, b)| **b == b'%') {
        let digits = src.get(position + 1..position + 3);
        if !digits.is_some_and(|d| d.iter().all(u8::is_ascii_hexdigit)) {
            let sequence = src
                .get(position..(position + 3).min(src.len()))
                .map(|s| String::from_utf8_lossy(s).into_owned())
                .unwrap_or_default();
            return Err(DecodeError::MalformedEscape { position, sequence });
        }
    }

    Ok(())
}
