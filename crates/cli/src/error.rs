// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the rules file, router and CLI.
//!
//! The pattern engine itself never surfaces errors; see [`crate::pattern::PatternError`].

use std::path::PathBuf;

/// wildroute error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rules file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using wildroute Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every URL matched, or the rules file checked clean
    Success = 0,
    /// At least one URL did not match, or a pattern failed to compile
    NoMatch = 1,
    /// Configuration or argument error, including an unreadable rules file
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            // The only file read is the rules file
            Error::Config { .. } | Error::Argument(_) | Error::Io { .. } => ExitCode::ConfigError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
