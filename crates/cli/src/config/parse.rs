// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for the rules file.

use std::collections::HashSet;
use std::path::Path;

/// Parse a TOML string value as Option<String>.
pub(super) fn parse_string_option(value: Option<&toml::Value>) -> Option<String> {
    value.and_then(|v| v.as_str()).map(String::from)
}

/// Parse a TOML integer value as Option<usize>, rejecting negatives.
pub(super) fn parse_usize_option(value: Option<&toml::Value>) -> Option<usize> {
    value
        .and_then(|v| v.as_integer())
        .and_then(|v| usize::try_from(v).ok())
}

/// Clean up a hand-written pattern.
///
/// Trims whitespace, drops one trailing comma and one layer of matching
/// single or double quotes, then trims again.
pub fn sanitize_pattern(value: &str) -> &str {
    let mut trimmed = value.trim();
    trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed);
    if trimmed.len() >= 2 {
        for quote in ['"', '\''] {
            if let Some(inner) = trimmed
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
            {
                trimmed = inner;
            }
        }
    }
    trimmed.trim()
}

/// Sanitize patterns, dropping empties and duplicates (first occurrence wins).
pub(super) fn normalize_patterns(patterns: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    patterns
        .iter()
        .map(|p| sanitize_pattern(p))
        .filter(|p| !p.is_empty() && seen.insert(*p))
        .map(String::from)
        .collect()
}

pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "wildroute: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

pub(super) fn warn_skipped_route(path: &Path, index: usize, reason: &str) {
    eprintln!(
        "wildroute: warning: {}: route[{}] skipped: {}",
        path.display(),
        index,
        reason
    );
}
