// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::io::Write;

use wildroute::cli::{CheckArgs, Cli, OutputFormat};
use wildroute::config;
use wildroute::discovery;
use wildroute::error::ExitCode;
use wildroute::output::{self, CheckOutput, InvalidOutput};
use wildroute::router::Router;

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let config = config::load(&path)?;
    let router = Router::new(&config);

    let result = CheckOutput {
        config: path.display().to_string(),
        routes: router.routes().len(),
        patterns: config.patterns().count(),
        invalid: router
            .invalid_patterns()
            .iter()
            .map(InvalidOutput::from)
            .collect(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.output {
        OutputFormat::Text => output::write_check_text(&mut out, &result)?,
        OutputFormat::Json => output::write_json(&mut out, &result)?,
    }
    out.flush()?;

    Ok(if result.invalid.is_empty() {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}
