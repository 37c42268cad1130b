// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! First-match-wins routing of URLs to browsers.
//!
//! Routes are tried in file order and patterns within a route in file
//! order. The first pattern that matches selects its route's browser;
//! otherwise the default browser is used.

use std::sync::Arc;

use serde::Serialize;

use crate::cache::PatternCache;
use crate::config::{Config, Route};
use crate::pattern::CompiledPattern;

/// Routing decision for one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// The URL that was routed.
    pub url: String,
    /// Browser to open the URL in.
    pub browser: String,
    /// Browser profile, if the route names one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Index of the matching route (`None` when falling back to the default).
    pub route: Option<usize>,
    /// Pattern that matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Decision {
    /// True if a route matched rather than the default browser.
    pub fn is_routed(&self) -> bool {
        self.route.is_some()
    }
}

/// A pattern that failed to compile, with the route it belongs to.
#[derive(Debug, Clone)]
pub struct InvalidPattern {
    /// Index of the owning route.
    pub route: usize,
    /// The compiled placeholder (never matches).
    pub compiled: Arc<CompiledPattern>,
}

/// Routes loaded from a rules file plus their compiled patterns.
#[derive(Debug)]
pub struct Router {
    default_browser: String,
    routes: Vec<Route>,
    cache: PatternCache,
}

impl Router {
    /// Build a router and precompile every pattern.
    pub fn new(config: &Config) -> Self {
        let cache = PatternCache::with_options(config.matcher.compile_options());
        cache.rebuild(config.patterns());
        Self {
            default_browser: config.default_browser.clone(),
            routes: config.routes.clone(),
            cache,
        }
    }

    /// Replace routes after a rules file reload.
    ///
    /// The cache is rebuilt wholesale; nothing compiled for the previous
    /// rules survives.
    pub fn reload(&mut self, config: &Config) {
        self.default_browser = config.default_browser.clone();
        self.routes = config.routes.clone();
        self.cache = PatternCache::with_options(config.matcher.compile_options());
        self.cache.rebuild(config.patterns());
    }

    /// Pick the browser for `url`.
    pub fn route(&self, url: &str) -> Decision {
        for (index, route) in self.routes.iter().enumerate() {
            if let Some(pattern) = route.patterns.iter().find(|p| self.cache.matches(p, url)) {
                tracing::debug!("{} matched route[{}] via '{}'", url, index, pattern);
                return Decision {
                    url: url.to_string(),
                    browser: route.browser.clone(),
                    profile: route.profile.clone(),
                    route: Some(index),
                    pattern: Some(pattern.clone()),
                };
            }
        }

        tracing::debug!("{} matched no route, using default browser", url);
        Decision {
            url: url.to_string(),
            browser: self.default_browser.clone(),
            profile: None,
            route: None,
            pattern: None,
        }
    }

    /// Patterns that failed to compile, in route order.
    pub fn invalid_patterns(&self) -> Vec<InvalidPattern> {
        self.routes
            .iter()
            .enumerate()
            .flat_map(|(index, route)| {
                route.patterns.iter().map(move |p| (index, p))
            })
            .filter_map(|(route, pattern)| {
                let compiled = self.cache.get_or_compile(pattern);
                (!compiled.is_valid()).then_some(InvalidPattern { route, compiled })
            })
            .collect()
    }

    /// Routes in evaluation order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Browser used when nothing matches.
    pub fn default_browser(&self) -> &str {
        &self.default_browser
    }

    /// The compiled pattern cache.
    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
