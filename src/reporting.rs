// src/reporting.rs
//! Presentation of estimator results.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fmt::{Display, Write};

use crate::config::{OutputConfig, OutputFormat};
use crate::rank::Ranks;

/// Results of one run of both estimators.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub sampling: SamplingResult,
    pub iteration: IterationResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct SamplingResult {
    pub samples: usize,
    pub ranks: Ranks<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IterationResult {
    pub ranks: Ranks<String>,
}

/// Renders the report in the configured format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn render(report: &RankReport, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Text => Ok(render_text(report, output.precision)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Prints the report to stdout.
///
/// # Errors
/// Returns error if rendering fails.
pub fn print_report(report: &RankReport, output: &OutputConfig) -> Result<()> {
    println!("{}", render(report, output)?);
    Ok(())
}

#[must_use]
pub fn render_text(report: &RankReport, precision: usize) -> String {
    let mut out = String::new();
    let sampling = format!(
        "PageRank Results from Sampling (n = {})",
        report.sampling.samples
    );
    let _ = writeln!(out, "{}", sampling.bold());
    out.push_str(&format_ranks(&report.sampling.ranks, precision));
    let _ = writeln!(out, "{}", "PageRank Results from Iteration".bold());
    out.push_str(&format_ranks(&report.iteration.ranks, precision));
    out.truncate(out.trim_end().len());
    out
}

/// One indented `page: rank` line per page, in page order.
#[must_use]
pub fn format_ranks<P: Display>(ranks: &Ranks<P>, precision: usize) -> String {
    let mut out = String::new();
    for (page, rank) in ranks {
        let _ = writeln!(out, "  {page}: {rank:.precision$}");
    }
    out
}
