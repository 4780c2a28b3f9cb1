//! Rendering and persistence of reconciliation reports.
//!
//! The core produces a [`ReconciliationReport`]; this module turns it into
//! something a human or a downstream tool can consume.

use crate::reconcile::{FoundFile, ReconciliationReport};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Output format for the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered table of missing files
    Table,
    Json,
    Yaml,
    /// Plain numbered list of missing files
    Simple,
}

/// Serialized shape of the JSON and YAML dumps.
#[derive(Serialize)]
struct ReportDocument<'a> {
    statistics: Statistics,
    found_files: &'a [FoundFile],
    missing_files: &'a [String],
}

#[derive(Serialize)]
struct Statistics {
    total_pending: usize,
    total_uploaded: usize,
    found_count: usize,
    missing_count: usize,
    match_rate: f64,
}

fn document(report: &ReconciliationReport) -> ReportDocument<'_> {
    ReportDocument {
        statistics: Statistics {
            total_pending: report.total_pending,
            total_uploaded: report.total_uploaded,
            found_count: report.found_count,
            missing_count: report.missing_count,
            match_rate: report.match_rate(),
        },
        found_files: &report.found_files,
        missing_files: &report.missing_files,
    }
}

/// Render the report in the requested format.
pub fn render(report: &ReconciliationReport, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&document(report))?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&document(report))?),
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Simple => Ok(render_simple(report)),
    }
}

fn render_table(report: &ReconciliationReport) -> String {
    let mut out = String::new();
    let width = report
        .missing_files
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let _ = writeln!(out, "Missing files ({})", report.missing_count);
    let _ = writeln!(out, "{:>4}  {:<width$}", "#", "Filename");
    let _ = writeln!(out, "{}", "-".repeat(width + 6));
    for (i, name) in report.missing_files.iter().enumerate() {
        let _ = writeln!(out, "{:>4}  {name}", i + 1);
    }
    out
}

fn render_simple(report: &ReconciliationReport) -> String {
    let mut out = String::new();
    for (i, name) in report.missing_files.iter().enumerate() {
        let _ = writeln!(out, "{:>4}. {name}", i + 1);
    }
    out
}

/// Persist the full plain-text report.
///
/// Layout: statistics block, matched `pending -> uploaded` pairs, then the
/// missing-file list.
pub fn write_report(report: &ReconciliationReport, path: &Path) -> Result<(), ReportError> {
    fs::write(path, format_text_report(report))?;
    Ok(())
}

fn format_text_report(report: &ReconciliationReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "File comparison report");
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out);
    let _ = writeln!(out, "Statistics:");
    let _ = writeln!(out, "- Total pending:  {}", report.total_pending);
    let _ = writeln!(out, "- Total uploaded: {}", report.total_uploaded);
    let _ = writeln!(out, "- Found:          {}", report.found_count);
    let _ = writeln!(out, "- Missing:        {}", report.missing_count);
    let _ = writeln!(out, "- Match rate:     {:.1}%", report.match_rate());
    let _ = writeln!(out);

    let _ = writeln!(out, "Found files (pending -> uploaded):");
    let _ = writeln!(out, "{}", "-".repeat(50));
    for found in &report.found_files {
        let _ = writeln!(out, "{} -> {}", found.pending, found.uploaded);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Missing files ({}):", report.missing_count);
    let _ = writeln!(out, "{}", "-".repeat(50));
    for name in &report.missing_files {
        let _ = writeln!(out, "{name}");
    }

    out
}
