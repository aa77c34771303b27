//! Filesystem access used by the resolver.
//!
//! The resolver only needs four questions answered, so they sit behind a
//! trait; the in-memory implementation in tests exercises failure paths that
//! are awkward to produce on a real disk.

use glob::{MatchOptions, Pattern};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::result::{push_warning, ResolveWarning};

/// Match options shared by every implementation: `*` never crosses a path
/// separator and never matches a leading dot.
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: !cfg!(windows),
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

pub trait Filesystem {
    /// True if `path` exists and is a directory (symlinks followed).
    fn is_dir(&self, path: &Path) -> bool;

    /// Full paths of the entries directly inside `path`.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Regular files matching an absolute pattern. Directories that cannot be
    /// read on the way are recorded in `warnings` and skipped.
    fn glob_files(&self, pattern: &Pattern, warnings: &mut Vec<ResolveWarning>) -> Vec<PathBuf>;

    /// Identity of a directory for cycle detection; falls back to `path`.
    fn canonicalize(&self, path: &Path) -> PathBuf;
}

/// The real filesystem via `std::fs` and the `glob` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }

    fn glob_files(&self, pattern: &Pattern, warnings: &mut Vec<ResolveWarning>) -> Vec<PathBuf> {
        let paths = match glob::glob_with(pattern.as_str(), MATCH_OPTIONS) {
            Ok(paths) => paths,
            Err(e) => {
                push_warning(
                    warnings,
                    ResolveWarning::InvalidPattern {
                        pattern: pattern.as_str().to_string(),
                        reason: e.msg.to_string(),
                    },
                );
                return Vec::new();
            }
        };
        paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    push_warning(
                        warnings,
                        ResolveWarning::UnreadableDirectory {
                            path: e.path().to_path_buf(),
                            reason: e.error().to_string(),
                        },
                    );
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect()
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
}
