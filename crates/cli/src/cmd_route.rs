// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Route command implementation.

use std::io::Write;

use wildroute::cli::{Cli, OutputFormat, RouteArgs};
use wildroute::config;
use wildroute::discovery;
use wildroute::error::ExitCode;
use wildroute::output;
use wildroute::router::{Decision, Router};

/// Run the route command.
pub fn run(cli: &Cli, args: &RouteArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let config = config::load(&path)?;
    let router = Router::new(&config);

    let decisions: Vec<Decision> = args.urls.iter().map(|url| router.route(url)).collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.output {
        OutputFormat::Text => output::write_decisions_text(&mut out, &decisions)?,
        OutputFormat::Json => output::write_json(&mut out, &decisions)?,
    }
    out.flush()?;

    Ok(ExitCode::Success)
}
