// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules file discovery.
//!
//! Walks from the current directory up to the git root looking for wildroute.toml.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Error, Result};

/// Find wildroute.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Stop at git root
        if dir.join(".git").exists() {
            return None;
        }
    }
    None
}

/// Resolve the rules file from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "WILDROUTE_CONFIG")
/// 2. Discovery from current directory up to git root
///
/// A missing rules file is a config error.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    match explicit {
        Some(path) if path.is_file() => Ok(path.to_path_buf()),
        Some(path) => Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        }),
        None => find_config(cwd).ok_or_else(|| Error::Config {
            message: format!(
                "no {} found in {} or its parents",
                CONFIG_FILE_NAME,
                cwd.display()
            ),
            path: None,
        }),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
