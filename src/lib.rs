pub mod config;
pub mod manifest;
pub mod matcher;
pub mod reconcile;
pub mod report;

// Re-export commonly used types
pub use config::{ConfigError, MatchConfig};
pub use manifest::{
    parse_pending, parse_uploaded, ManifestError, ManifestKind, PendingManifest, UploadedSet,
};
pub use matcher::{fuzzy_match, normalize};
pub use reconcile::{
    reconcile, reconcile_parsed, FoundFile, MatchResult, ReconciliationReport,
};
pub use report::{render, write_report, OutputFormat, ReportError};
