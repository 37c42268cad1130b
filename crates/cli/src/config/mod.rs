// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules file parsing and validation.
//!
//! Handles wildroute.toml parsing with version validation and unknown key warnings.

mod parse;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pattern::CompileOptions;
use parse::{
    normalize_patterns, parse_string_option, parse_usize_option, warn_skipped_route,
    warn_unknown_key,
};

pub use parse::sanitize_pattern;

/// The only rules file version understood by this build.
pub const SUPPORTED_VERSION: i64 = 1;

/// Rules file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "wildroute.toml";

/// Known top-level keys.
const KNOWN_KEYS: &[&str] = &["version", "default_browser", "matcher", "route"];

/// Known keys inside a `[[route]]` table.
const KNOWN_ROUTE_KEYS: &[&str] = &["patterns", "browser", "profile"];

/// Known keys inside `[matcher]`.
const KNOWN_MATCHER_KEYS: &[&str] = &["size_limit"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    default_browser: Option<toml::Value>,

    #[serde(default)]
    matcher: Option<toml::Value>,

    #[serde(default)]
    route: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full rules file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Browser used when no route matches.
    pub default_browser: String,

    /// Pattern compilation settings.
    pub matcher: MatcherConfig,

    /// Routes in file order; the first matching route wins.
    pub routes: Vec<Route>,
}

/// `[matcher]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Compiled expression size limit in bytes.
    pub size_limit: Option<usize>,
}

impl MatcherConfig {
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            size_limit: self.size_limit,
        }
    }
}

/// One `[[route]]` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Normalized, de-duplicated patterns in file order.
    pub patterns: Vec<String>,
    /// Target browser name.
    pub browser: String,
    /// Optional browser profile.
    pub profile: Option<String>,
}

impl Config {
    /// Every pattern across all routes, in route order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes
            .iter()
            .flat_map(|route| route.patterns.iter().map(String::as_str))
    }
}

/// Load and parse a rules file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse a rules file, warning on unknown keys and skipped routes.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| config_error(e, path))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error("missing required field: version", path))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(
            format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path,
        ));
    }

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let default_browser = parse_string_option(flexible.default_browser.as_ref())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| config_error("default browser is required", path))?;

    let matcher = parse_matcher_config(flexible.matcher.as_ref(), path)?;
    let routes = parse_routes(flexible.route.as_ref(), path)?;

    tracing::debug!(
        "loaded {} route(s) from {}",
        routes.len(),
        path.display()
    );

    Ok(Config {
        version,
        default_browser,
        matcher,
        routes,
    })
}

fn parse_matcher_config(value: Option<&toml::Value>, path: &Path) -> Result<MatcherConfig> {
    let Some(value) = value else {
        return Ok(MatcherConfig::default());
    };
    let toml::Value::Table(t) = value else {
        return Err(config_error("matcher must be a table", path));
    };

    for key in t.keys() {
        if !KNOWN_MATCHER_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("matcher.{}", key));
        }
    }

    let size_limit = match t.get("size_limit") {
        None => None,
        Some(v) => Some(parse_usize_option(Some(v)).ok_or_else(|| {
            config_error("matcher.size_limit must be a non-negative integer", path)
        })?),
    };

    Ok(MatcherConfig { size_limit })
}

fn parse_routes(value: Option<&toml::Value>, path: &Path) -> Result<Vec<Route>> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let toml::Value::Array(entries) = value else {
        return Err(config_error("route must be an array of tables ([[route]])", path));
    };

    let mut routes = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let toml::Value::Table(t) = entry else {
            return Err(config_error(format!("route[{}] must be a table", index), path));
        };

        for key in t.keys() {
            if !KNOWN_ROUTE_KEYS.contains(&key.as_str()) {
                warn_unknown_key(path, &format!("route[{}].{}", index, key));
            }
        }

        let patterns = match t.get("patterns") {
            None => Vec::new(),
            Some(toml::Value::String(s)) => normalize_patterns(std::slice::from_ref(s)),
            Some(toml::Value::Array(items)) => {
                let mut raw = Vec::with_capacity(items.len());
                for item in items {
                    let Some(s) = item.as_str() else {
                        return Err(config_error(
                            format!("route[{}].patterns must contain only strings", index),
                            path,
                        ));
                    };
                    raw.push(s.to_string());
                }
                normalize_patterns(&raw)
            }
            Some(_) => {
                return Err(config_error(
                    format!("route[{}].patterns must be a string or array of strings", index),
                    path,
                ));
            }
        };

        let browser = parse_string_option(t.get("browser"))
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        let profile = parse_string_option(t.get("profile"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if browser.is_empty() {
            warn_skipped_route(path, index, "no browser");
            continue;
        }
        if patterns.is_empty() {
            warn_skipped_route(path, index, "no patterns");
            continue;
        }

        routes.push(Route {
            patterns,
            browser,
            profile,
        });
    }

    Ok(routes)
}

fn config_error(message: impl ToString, path: &Path) -> Error {
    Error::Config {
        message: message.to_string(),
        path: Some(path.to_path_buf()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
