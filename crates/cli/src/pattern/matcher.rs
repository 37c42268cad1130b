// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled wildcard patterns.

use regex::{Regex, RegexBuilder};

use super::translate;

/// A compiled wildcard pattern.
///
/// Compilation never fails outward: a pattern whose expression cannot be
/// built becomes [`CompiledPattern::Never`], which matches nothing.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    /// Pattern without `*`, compared for whole-string equality.
    Exact(ExactMatcher),
    /// Pattern translated into an anchored regular expression.
    Wildcard(WildcardMatcher),
    /// Pattern whose expression was rejected by the regex engine.
    Never(NeverMatcher),
}

/// Matcher for patterns without any `*`.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    pattern: String,
}

/// Matcher backed by the translated regular expression.
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    pattern: String,
    regex: Regex,
    host_only: bool,
}

/// Placeholder for a pattern that failed to compile.
#[derive(Debug, Clone)]
pub struct NeverMatcher {
    pattern: String,
    reason: String,
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Knobs for building the regular expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Upper bound in bytes on the compiled expression (`None` keeps the
    /// regex crate's default).
    pub size_limit: Option<usize>,
}

impl CompiledPattern {
    /// Compile a pattern with default options.
    pub fn compile(pattern: &str) -> Self {
        Self::compile_with(pattern, &CompileOptions::default())
    }

    /// Compile a pattern.
    ///
    /// Failures are logged at warn level and produce a pattern that never
    /// matches.
    pub fn compile_with(pattern: &str, options: &CompileOptions) -> Self {
        if !translate::has_wildcard(pattern) {
            return CompiledPattern::Exact(ExactMatcher::new(pattern));
        }

        match WildcardMatcher::new(pattern, options) {
            Ok(m) => CompiledPattern::Wildcard(m),
            Err(e) => {
                tracing::warn!("invalid wildcard pattern '{}': {}", pattern, e);
                CompiledPattern::Never(NeverMatcher {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Test a candidate. The whole candidate must be consumed.
    pub fn is_match(&self, candidate: &str) -> bool {
        match self {
            CompiledPattern::Exact(m) => m.is_match(candidate),
            CompiledPattern::Wildcard(m) => m.is_match(candidate),
            CompiledPattern::Never(_) => false,
        }
    }

    /// The raw pattern this was compiled from.
    pub fn pattern(&self) -> &str {
        match self {
            CompiledPattern::Exact(m) => &m.pattern,
            CompiledPattern::Wildcard(m) => &m.pattern,
            CompiledPattern::Never(m) => &m.pattern,
        }
    }

    /// Whether the raw pattern names only a host.
    pub fn is_host_only(&self) -> bool {
        match self {
            CompiledPattern::Wildcard(m) => m.host_only,
            other => translate::is_host_only(other.pattern()),
        }
    }

    /// Generated expression, for diagnostics.
    pub fn regex_source(&self) -> Option<&str> {
        match self {
            CompiledPattern::Wildcard(m) => Some(m.regex.as_str()),
            CompiledPattern::Exact(_) | CompiledPattern::Never(_) => None,
        }
    }

    /// Why compilation failed, if it did.
    pub fn error(&self) -> Option<&str> {
        match self {
            CompiledPattern::Never(m) => Some(&m.reason),
            CompiledPattern::Exact(_) | CompiledPattern::Wildcard(_) => None,
        }
    }

    /// False for patterns that failed to compile.
    pub fn is_valid(&self) -> bool {
        !matches!(self, CompiledPattern::Never(_))
    }
}

impl ExactMatcher {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
        }
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.pattern == candidate
    }
}

impl WildcardMatcher {
    /// Translate and build the anchored expression.
    pub fn new(pattern: &str, options: &CompileOptions) -> Result<Self, PatternError> {
        let translation = translate::translate(pattern);

        let mut builder = RegexBuilder::new(&translation.source);
        if let Some(limit) = options.size_limit {
            builder.size_limit(limit);
        }
        let regex = builder.build()?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            host_only: translation.host_only,
        })
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
