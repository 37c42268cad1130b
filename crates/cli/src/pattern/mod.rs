// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! URL wildcard pattern engine.
//!
//! A pattern is compiled once into a [`CompiledPattern`] and then tested
//! against any number of candidate URLs:
//! - No `*` at all: exact string equality
//! - Otherwise: an anchored regular expression built by [`translate`]
//!
//! Neither step ever returns an error to the caller.

pub mod matcher;
pub mod translate;

pub use matcher::{CompileOptions, CompiledPattern, PatternError};
pub use translate::{Translation, has_scheme, has_wildcard, is_host_only};

/// Compile `pattern` and test `candidate` against it.
///
/// ```
/// assert!(wildroute::matches("*.example.com", "https://sub.example.com/a"));
/// assert!(!wildroute::matches("*.example.com", "https://example.org"));
/// ```
pub fn matches(pattern: &str, candidate: &str) -> bool {
    CompiledPattern::compile(pattern).is_match(candidate)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
