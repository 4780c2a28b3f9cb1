//! Reconciliation of the pending manifest against the upload log.
//!
//! Every run is stateless: both sources are parsed from scratch, every
//! pending entry is matched against the full uploaded set, and each ends
//! up in exactly one of the report's two outcome lists.

use crate::config::MatchConfig;
use crate::manifest::{parse_pending, parse_uploaded, ManifestError, PendingManifest, UploadedSet};
use crate::matcher::fuzzy_match;
use serde::Serialize;
use std::path::Path;

/// Outcome of matching one pending filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Found { pending: String, uploaded: String },
    Missing { pending: String },
}

/// A pending filename together with the upload record it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundFile {
    pub pending: String,
    pub uploaded: String,
}

/// Aggregated result of one comparison run.
///
/// Built through [`ReconciliationReport::from_results`] so the counters
/// always agree with the underlying lists: `found_count + missing_count ==
/// total_pending`, and `total_uploaded` is the cardinality of the
/// deduplicated uploaded set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciliationReport {
    /// Matched pairs, in pending-manifest order.
    pub found_files: Vec<FoundFile>,

    /// Pending filenames with no upload record, in pending-manifest order.
    pub missing_files: Vec<String>,

    pub total_pending: usize,
    pub total_uploaded: usize,
    pub found_count: usize,
    pub missing_count: usize,
}

impl ReconciliationReport {
    /// Build a report from per-entry results, deriving all counters.
    pub fn from_results(results: Vec<MatchResult>, total_uploaded: usize) -> Self {
        let mut found_files = Vec::new();
        let mut missing_files = Vec::new();

        for result in results {
            match result {
                MatchResult::Found { pending, uploaded } => {
                    found_files.push(FoundFile { pending, uploaded });
                }
                MatchResult::Missing { pending } => missing_files.push(pending),
            }
        }

        let found_count = found_files.len();
        let missing_count = missing_files.len();

        Self {
            total_pending: found_count + missing_count,
            total_uploaded,
            found_count,
            missing_count,
            found_files,
            missing_files,
        }
    }

    /// Share of pending files with a matching upload record, in percent.
    /// An empty pending manifest rates as 0.0.
    pub fn match_rate(&self) -> f64 {
        if self.total_pending == 0 {
            0.0
        } else {
            self.found_count as f64 / self.total_pending as f64 * 100.0
        }
    }
}

/// Compare the pending manifest against the upload log.
///
/// Parser failures propagate unchanged. Empty sources are not an error;
/// they produce a report with the corresponding counters at zero.
pub fn reconcile(
    pending_path: &Path,
    uploaded_path: &Path,
    config: &MatchConfig,
) -> Result<ReconciliationReport, ManifestError> {
    let pending = parse_pending(pending_path, config)?;
    let uploaded = parse_uploaded(uploaded_path, config)?;
    Ok(reconcile_parsed(&pending, &uploaded, config))
}

/// Match every pending entry, in manifest order, against the uploaded set.
pub fn reconcile_parsed(
    pending: &PendingManifest,
    uploaded: &UploadedSet,
    config: &MatchConfig,
) -> ReconciliationReport {
    let results = pending
        .entries
        .iter()
        .map(|entry| match fuzzy_match(entry, uploaded, config) {
            Some(matched) => MatchResult::Found {
                pending: entry.clone(),
                uploaded: matched,
            },
            None => MatchResult::Missing {
                pending: entry.clone(),
            },
        })
        .collect();

    ReconciliationReport::from_results(results, uploaded.len())
}
