// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! URL wildcard patterns for routing links to the right browser.
//!
//! The [`pattern`] module is the engine: it compiles a rule's pattern and
//! tests candidate URLs against it, never failing outward. The remaining
//! modules load a rules file and route URLs first-match-wins.

pub mod cache;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod pattern;
pub mod router;

pub use cache::{CacheStats, PatternCache};
pub use cli::{CheckArgs, Cli, Command, OutputFormat, RouteArgs, TestArgs};
pub use config::{Config, MatcherConfig, Route};
pub use error::{Error, ExitCode, Result};
pub use pattern::{CompileOptions, CompiledPattern, PatternError, matches};
pub use router::{Decision, Router};
