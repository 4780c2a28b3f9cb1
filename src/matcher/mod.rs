//! Fuzzy filename matching across the two naming conventions.
//!
//! The pending manifest prefixes names with the visibility marker; the
//! upload log records them bare. Matching strips the marker, tries exact
//! membership first, and falls back to comparing extension-normalized
//! forms. No similarity scoring is involved: after normalization the
//! comparison is plain equality.

use crate::config::MatchConfig;
use crate::manifest::UploadedSet;

/// Remove every occurrence of the suffix in both its configured and its
/// uppercased spelling.
///
/// Both spellings are stripped as independent literals rather than by one
/// case-insensitive pass, so with the default `.pdf` suffix `x.pdf`,
/// `x.PDF`, and `x.pdf.PDF` all normalize to `x`.
pub fn normalize(name: &str, config: &MatchConfig) -> String {
    name.replace(&config.suffix, "")
        .replace(&config.suffix.to_uppercase(), "")
}

/// Find the upload record corresponding to a pending filename.
///
/// The marker prefix is stripped to obtain the base name; a pending name
/// without the marker is used whole. An exact member of the uploaded set
/// wins outright. Otherwise the base name is compared, after
/// normalization, against every member in first-seen order, and the first
/// equal member wins. `None` means no upload record exists for the file.
pub fn fuzzy_match(
    pending: &str,
    uploaded: &UploadedSet,
    config: &MatchConfig,
) -> Option<String> {
    let base = pending.strip_prefix(&config.marker).unwrap_or(pending);

    if uploaded.contains(base) {
        return Some(base.to_string());
    }

    let wanted = normalize(base, config);
    uploaded
        .iter()
        .find(|name| normalize(name, config) == wanted)
        .map(str::to_string)
}
