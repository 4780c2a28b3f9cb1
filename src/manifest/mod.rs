//! Parsers for the two manifest formats.
//!
//! The pending manifest is line-oriented: one candidate filename per line,
//! `<marker><name><suffix>`. The upload log is free-form text scanned as a
//! whole for `<upload_literal>_<digits>_<marker><name><suffix>` fragments.
//! Non-conforming lines are noise, not errors; only missing or unreadable
//! files fail a parse.

mod types;

pub use types::{ManifestKind, PendingManifest, UploadedSet};

use crate::config::{ConfigError, MatchConfig};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("{kind} manifest not found at {}", path.display())]
    NotFound { kind: ManifestKind, path: PathBuf },

    #[error("Failed to read {kind} manifest at {}: {source}", path.display())]
    Read {
        kind: ManifestKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Read a manifest file to a string, classifying the failure by manifest.
fn read_source(kind: ManifestKind, path: &Path) -> Result<String, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::NotFound {
            kind,
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(|source| ManifestError::Read {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

/// Parse the pending manifest.
///
/// A line qualifies iff, after trimming surrounding whitespace, it is
/// non-empty, starts with the marker, and ends with the case-exact suffix.
/// Everything else is counted as skipped and otherwise ignored.
pub fn parse_pending(path: &Path, config: &MatchConfig) -> Result<PendingManifest, ManifestError> {
    let content = read_source(ManifestKind::Pending, path)?;

    let mut manifest = PendingManifest::default();
    for line in content.lines() {
        let line = line.trim();
        if !line.is_empty() && line.starts_with(&config.marker) && line.ends_with(&config.suffix) {
            manifest.entries.push(line.to_string());
        } else {
            manifest.skipped += 1;
        }
    }

    Ok(manifest)
}

/// Parse the upload log.
///
/// The whole blob is scanned regardless of line boundaries; every captured
/// filename is collected, duplicates collapse to the first occurrence.
pub fn parse_uploaded(path: &Path, config: &MatchConfig) -> Result<UploadedSet, ManifestError> {
    let pattern = config.upload_pattern()?;
    let content = read_source(ManifestKind::Uploaded, path)?;

    let mut uploaded = UploadedSet::new();
    for caps in pattern.captures_iter(&content) {
        if let Some(name) = caps.get(1) {
            uploaded.insert(name.as_str().to_string());
        }
    }

    Ok(uploaded)
}
