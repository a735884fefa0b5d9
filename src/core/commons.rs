// src/core/commons.rs

use std::borrow::Cow;

/// Quotes a value so that `shlex::split` (and POSIX shells) read it back as one word.
///
/// Values made only of shell-safe characters are returned unchanged.
pub fn quote_for_shell(value: &str) -> Cow<'_, str> {
    match shlex::try_quote(value) {
        Ok(quoted) => quoted,
        // Only NUL bytes are refused. Fall back to plain single-quoting; the
        // launcher will reject the argument anyway.
        Err(_) => Cow::Owned(format!("'{}'", value.replace('\'', "'\\''"))),
    }
}
