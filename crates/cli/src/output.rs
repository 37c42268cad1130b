// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering of command results.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::{self, Write};

use serde::Serialize;

use crate::pattern::CompiledPattern;
use crate::router::{Decision, InvalidPattern};

/// Result of `wildroute test`.
#[derive(Debug, Serialize)]
pub struct TestOutput<'a> {
    pub pattern: &'a str,
    pub kind: &'static str,
    pub host_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
    pub results: Vec<UrlResult<'a>>,
}

/// One URL tested against one pattern.
#[derive(Debug, Serialize)]
pub struct UrlResult<'a> {
    pub url: &'a str,
    pub matched: bool,
}

impl<'a> TestOutput<'a> {
    pub fn new(compiled: &'a CompiledPattern, urls: &'a [String]) -> Self {
        Self {
            pattern: compiled.pattern(),
            kind: kind_name(compiled),
            host_only: compiled.is_host_only(),
            regex: compiled.regex_source(),
            error: compiled.error(),
            results: urls
                .iter()
                .map(|url| UrlResult {
                    url,
                    matched: compiled.is_match(url),
                })
                .collect(),
        }
    }

    pub fn all_matched(&self) -> bool {
        self.results.iter().all(|r| r.matched)
    }
}

/// Result of `wildroute check`.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub config: String,
    pub routes: usize,
    pub patterns: usize,
    pub invalid: Vec<InvalidOutput>,
}

#[derive(Debug, Serialize)]
pub struct InvalidOutput {
    pub route: usize,
    pub pattern: String,
    pub error: String,
}

impl From<&InvalidPattern> for InvalidOutput {
    fn from(invalid: &InvalidPattern) -> Self {
        Self {
            route: invalid.route,
            pattern: invalid.compiled.pattern().to_string(),
            error: invalid.compiled.error().unwrap_or_default().to_string(),
        }
    }
}

fn kind_name(compiled: &CompiledPattern) -> &'static str {
    match compiled {
        CompiledPattern::Exact(_) => "exact",
        CompiledPattern::Wildcard(_) => "wildcard",
        CompiledPattern::Never(_) => "invalid",
    }
}

/// Write `wildroute test` results as text.
pub fn write_test_text(w: &mut impl Write, output: &TestOutput<'_>, explain: bool) -> io::Result<()> {
    if explain {
        writeln!(w, "pattern:   {}", output.pattern)?;
        writeln!(w, "kind:      {}", output.kind)?;
        writeln!(w, "host-only: {}", if output.host_only { "yes" } else { "no" })?;
        if let Some(regex) = output.regex {
            writeln!(w, "regex:     {}", regex)?;
        }
        if let Some(error) = output.error {
            writeln!(w, "error:     {}", error)?;
        }
        writeln!(w)?;
    }

    for result in &output.results {
        let label = if result.matched { "match" } else { "no match" };
        writeln!(w, "{:<8}  {}", label, result.url)?;
    }
    Ok(())
}

/// Write routing decisions as text, one line per URL.
pub fn write_decisions_text(w: &mut impl Write, decisions: &[Decision]) -> io::Result<()> {
    for decision in decisions {
        write!(w, "{} -> {}", decision.url, decision.browser)?;
        if let Some(profile) = &decision.profile {
            write!(w, " ({})", profile)?;
        }
        match (decision.route, &decision.pattern) {
            (Some(index), Some(pattern)) => writeln!(w, "  [route {}: {}]", index, pattern)?,
            _ => writeln!(w, "  [default]")?,
        }
    }
    Ok(())
}

/// Write `wildroute check` results as text.
pub fn write_check_text(w: &mut impl Write, output: &CheckOutput) -> io::Result<()> {
    for invalid in &output.invalid {
        writeln!(
            w,
            "route[{}]: '{}' never matches: {}",
            invalid.route, invalid.pattern, invalid.error
        )?;
    }

    let status = if output.invalid.is_empty() { "ok" } else { "FAIL" };
    writeln!(
        w,
        "{}: {} pattern(s) in {} route(s), {} invalid",
        status,
        output.patterns,
        output.routes,
        output.invalid.len()
    )
}

/// Write any serializable value as pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(w: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
