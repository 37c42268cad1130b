// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! wildroute CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use wildroute::cli::{Cli, Command};
use wildroute::error::ExitCode;

mod cmd_check;
mod cmd_route;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("WILDROUTE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("wildroute: {}", e);
            match e.downcast_ref::<wildroute::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Test(args)) => cmd_test::run(args),
        Some(Command::Route(args)) => cmd_route::run(&cli, args),
        Some(Command::Check(args)) => cmd_check::run(&cli, args),
    }
}
