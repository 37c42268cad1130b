// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled pattern cache.
//!
//! Keyed by the raw pattern string. The owner of the rules decides when to
//! invalidate it; on reload the whole cache is rebuilt from the new set.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use crate::pattern::{CompileOptions, CompiledPattern};

/// Thread-safe cache of compiled patterns.
#[derive(Debug, Default)]
pub struct PatternCache {
    /// Concurrent map from raw pattern to compiled pattern.
    inner: DashMap<String, Arc<CompiledPattern>>,
    /// Options every entry is compiled with.
    options: CompileOptions,
    /// Cache hit count.
    hits: AtomicUsize,
    /// Cache miss count.
    misses: AtomicUsize,
}

/// Cache statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: usize,
    /// Number of cache misses.
    pub misses: usize,
    /// Number of entries in cache.
    pub entries: usize,
}

impl PatternCache {
    /// Create an empty cache using default compile options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache compiling with `options`.
    pub fn with_options(options: CompileOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Compile options used for new entries.
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Return the compiled form of `pattern`, compiling it on a miss.
    ///
    /// The returned Arc allows cheap sharing across threads.
    pub fn get_or_compile(&self, pattern: &str) -> Arc<CompiledPattern> {
        if let Some(entry) = self.inner.get(pattern) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(entry.value());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let compiled = Arc::new(CompiledPattern::compile_with(pattern, &self.options));
        // A racing thread may have inserted first; keep whichever landed.
        let entry = self
            .inner
            .entry(pattern.to_string())
            .or_insert(compiled);
        Arc::clone(entry.value())
    }

    /// Test `candidate` against the cached form of `pattern`.
    pub fn matches(&self, pattern: &str, candidate: &str) -> bool {
        self.get_or_compile(pattern).is_match(candidate)
    }

    /// Drop every entry and precompile `patterns`.
    pub fn rebuild<I, S>(&self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.clear();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            self.inner.insert(
                pattern.to_string(),
                Arc::new(CompiledPattern::compile_with(pattern, &self.options)),
            );
        }
        tracing::debug!("pattern cache rebuilt with {} entries", self.inner.len());
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.inner.clear();
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.inner.len(),
        }
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
