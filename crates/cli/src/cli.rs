// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Route URLs to browsers with wildcard patterns
#[derive(Parser)]
#[command(name = "wildroute")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific rules file
    #[arg(short = 'C', long = "config", global = true, env = "WILDROUTE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Test one pattern against URLs
    Test(TestArgs),
    /// Pick a browser for each URL using the rules file
    Route(RouteArgs),
    /// Compile every pattern in the rules file and report failures
    Check(CheckArgs),
}

#[derive(clap::Args)]
pub struct TestArgs {
    /// Wildcard pattern (`*` matches anything, `\*` a literal asterisk)
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// URLs to test
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Also print the classification and generated expression
    #[arg(long)]
    pub explain: bool,

    /// Compiled expression size limit in bytes
    #[arg(long, value_name = "BYTES")]
    pub size_limit: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct RouteArgs {
    /// URLs to route
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
