//! Scratch directory trees for resolver tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct Tree {
    dir: TempDir,
}

impl Tree {
    /// Creates every listed file (parents included) with empty content.
    pub fn with_files(files: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        for f in files {
            let path = dir.path().join(f);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create parent");
            }
            fs::write(&path, b"").expect("write file");
        }
        Self { dir }
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).expect("mkdir");
        path
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> String {
        self.dir.path().join(rel).to_string_lossy().into_owned()
    }

    /// Resolved entries relative to the root, for readable assertions.
    pub fn relative(&self, entries: Vec<String>) -> Vec<String> {
        let root = self.dir.path().to_string_lossy().into_owned();
        entries
            .into_iter()
            .map(|e| match e.strip_prefix(&root) {
                Some(rest) => rest.trim_start_matches(std::path::MAIN_SEPARATOR).to_string(),
                None => e,
            })
            .collect()
    }
}
