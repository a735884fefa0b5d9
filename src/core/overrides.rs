// src/core/overrides.rs

use std::collections::HashMap;

/// Key of the override that applies to every flag.
pub const WILDCARD: &str = "*";

/// Placeholder replaced by the flag name (without leading dashes) in a template.
pub const PLACEHOLDER: &str = "%s";

/// Rewrites whitespace-separated flags through a player's override table.
///
/// - With a `"*"` entry, every flag goes through the wildcard template.
/// - Otherwise only flags with an exact entry survive (a whitelist); the rest are dropped.
///
/// In both cases `%s` is replaced with the flag minus its leading `-`, and
/// templates that render to nothing are dropped. Order is preserved.
pub fn apply_overrides(raw_flags: &str, overrides: &HashMap<String, String>) -> String {
    let wildcard = overrides.get(WILDCARD);

    raw_flags
        .split_whitespace()
        .filter_map(|flag| {
            let template = wildcard.or_else(|| overrides.get(flag))?;
            let stripped = flag.trim_start_matches('-');
            let rendered = template.replace(PLACEHOLDER, stripped);
            if rendered.is_empty() {
                None
            } else {
                Some(rendered)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_wildcard_rewrites_every_flag() {
        let overrides = table(&[("*", "--mpv-options=%s")]);
        assert_eq!(
            apply_overrides("--fs --mute", &overrides),
            "--mpv-options=fs --mpv-options=mute"
        );
    }

    #[test]
    fn test_wildcard_takes_precedence_over_specific_keys() {
        let overrides = table(&[("*", "--bar=%s"), ("--foo", "--ignored")]);
        assert_eq!(apply_overrides("--foo --baz", &overrides), "--bar=foo --bar=baz");
    }

    #[test]
    fn test_specific_key_substitutes_stripped_flag() {
        let overrides = table(&[("--foo", "--bar=%s")]);
        assert_eq!(apply_overrides("--foo", &overrides), "--bar=foo");
    }

    #[test]
    fn test_unmatched_flags_are_dropped() {
        let overrides = table(&[("--foo", "--%s-bar"), ("-v", "--verbose")]);
        assert_eq!(
            apply_overrides("--keep-open --foo -v --vo=gpu", &overrides),
            "--foo-bar --verbose"
        );
    }

    #[test]
    fn test_parameterised_flags_match_as_a_whole() {
        let overrides = table(&[("--vo=gpu", "--mpv-options=%s")]);
        assert_eq!(apply_overrides("--vo=gpu --vo=x11", &overrides), "--mpv-options=vo=gpu");
    }

    #[test]
    fn test_empty_template_voids_flags() {
        let overrides = table(&[("*", "")]);
        assert_eq!(apply_overrides("--fs --mute", &overrides), "");
    }

    #[test]
    fn test_extra_whitespace_is_ignored() {
        let overrides = table(&[("*", "--%s")]);
        assert_eq!(apply_overrides("  -fs \t --mute  ", &overrides), "--fs --mute");
    }

    #[test]
    fn test_every_placeholder_is_replaced() {
        let overrides = table(&[("--x", "--%s --no-%s")]);
        assert_eq!(apply_overrides("--x", &overrides), "--x --no-x");
    }
}
