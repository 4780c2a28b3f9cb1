use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for manifest fixtures.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Should create temp dir")
}

/// Write a manifest fixture into the test directory and return its path.
pub fn write_manifest(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Should write manifest fixture");
    path
}
