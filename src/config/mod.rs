use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid upload-log pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Default visibility marker prefix
fn default_marker() -> String {
    "[公开]".to_string()
}

/// Default pending filename suffix
fn default_suffix() -> String {
    ".pdf".to_string()
}

/// Default literal opening an upload-log fragment
fn default_upload_literal() -> String {
    "upload".to_string()
}

/// Naming convention shared by the two manifests.
///
/// The convention is fixed for a given deployment; the defaults match the
/// production manifests. All three values are treated as literal strings
/// when the upload-log scan pattern is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchConfig {
    /// Prefix marking a filename as published, e.g. `[公开]`.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Suffix a pending filename must carry, compared case-exact.
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Literal token that opens every upload-log fragment.
    #[serde(default = "default_upload_literal")]
    pub upload_literal: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            suffix: default_suffix(),
            upload_literal: default_upload_literal(),
        }
    }
}

impl MatchConfig {
    /// Build the regex that extracts uploaded filenames from the log blob.
    ///
    /// Matches `<upload_literal>_<digits>_<marker><name><suffix>` anywhere
    /// in the text and captures `<name><suffix>`, where `<name>` is the run
    /// of characters between the marker and the first dot that follows it.
    pub fn upload_pattern(&self) -> Result<Regex, ConfigError> {
        let pattern = format!(
            "{}_\\d+_{}([^.]+{})",
            regex::escape(&self.upload_literal),
            regex::escape(&self.marker),
            regex::escape(&self.suffix),
        );
        Ok(Regex::new(&pattern)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern_captures_filename() {
        let config = MatchConfig::default();
        let pattern = config.upload_pattern().expect("Should build pattern");

        let caps = pattern
            .captures("upload_1700000000_[公开]999.pdf")
            .expect("Should match");
        assert_eq!(&caps[1], "999.pdf");
    }

    #[test]
    fn test_pattern_requires_digits_between_literals() {
        let config = MatchConfig::default();
        let pattern = config.upload_pattern().expect("Should build pattern");

        assert!(!pattern.is_match("upload_[公开]999.pdf"));
        assert!(!pattern.is_match("upload_abc_[公开]999.pdf"));
    }

    #[test]
    fn test_pattern_capture_stops_at_first_dot() {
        let config = MatchConfig::default();
        let pattern = config.upload_pattern().expect("Should build pattern");

        // The captured name runs up to the first dot after the marker.
        let caps = pattern
            .captures("upload_42_[公开]report.pdf.bak")
            .expect("Should match");
        assert_eq!(&caps[1], "report.pdf");
    }

    #[test]
    fn test_pattern_escapes_custom_literals() {
        let config = MatchConfig {
            marker: "[内部]".to_string(),
            suffix: ".docx".to_string(),
            upload_literal: "sync".to_string(),
        };
        let pattern = config.upload_pattern().expect("Should build pattern");

        let caps = pattern
            .captures("sync_7_[内部]minutes.docx")
            .expect("Should match");
        assert_eq!(&caps[1], "minutes.docx");
        assert!(!pattern.is_match("upload_7_[内部]minutes.docx"));
    }
}
