//! Helpers for filesystem tests.

use std::{fs, path::PathBuf};

pub use tempfile::TempDir;

/// A fresh scratch directory, removed on drop (also when a test panics).
pub fn scratch() -> TempDir {
    tempfile::tempdir().expect("create scratch dir")
}

pub trait WriteFile {
    /// Write `contents` to `name` inside the directory.
    fn write(&self, name: &str, contents: &str) -> PathBuf;
}

impl WriteFile for TempDir {
    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}
