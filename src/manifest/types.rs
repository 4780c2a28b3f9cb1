use std::collections::HashSet;
use std::fmt;

/// Which of the two manifests an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Pending,
    Uploaded,
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestKind::Pending => write!(f, "pending"),
            ManifestKind::Uploaded => write!(f, "uploaded"),
        }
    }
}

/// Qualifying lines of the pending manifest.
///
/// Entries keep the manifest's order and duplicates; the order carries
/// through to the report.
#[derive(Debug, Clone, Default)]
pub struct PendingManifest {
    pub entries: Vec<String>,

    /// Lines that did not qualify (blank, comments, malformed) and were
    /// skipped without error.
    pub skipped: usize,
}

impl PendingManifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Deduplicated uploaded filenames, first-seen order preserved.
///
/// Iteration follows the order captures first appeared in the log, so the
/// matcher's fallback tie-break is deterministic: among members that
/// normalize equally, the first-inserted one wins.
#[derive(Debug, Clone, Default)]
pub struct UploadedSet {
    names: Vec<String>,
    index: HashSet<String>,
}

impl UploadedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a filename, ignoring duplicates. Returns whether it was new.
    pub fn insert(&mut self, name: String) -> bool {
        if self.index.contains(&name) {
            return false;
        }
        self.index.insert(name.clone());
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl FromIterator<String> for UploadedSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = UploadedSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates() {
        let mut set = UploadedSet::new();
        assert!(set.insert("a.pdf".to_string()));
        assert!(set.insert("b.pdf".to_string()));
        assert!(!set.insert("a.pdf".to_string()));

        assert_eq!(set.len(), 2);
        assert!(set.contains("a.pdf"));
        assert!(set.contains("b.pdf"));
    }

    #[test]
    fn test_iter_keeps_first_seen_order() {
        let set: UploadedSet = ["c.pdf", "a.pdf", "b.pdf", "a.pdf"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec!["c.pdf", "a.pdf", "b.pdf"]);
    }
}
