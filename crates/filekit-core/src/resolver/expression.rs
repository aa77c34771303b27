//! Classification of raw path expressions.

use std::path::{Path, PathBuf};

use super::fs::Filesystem;
use super::path::absolutize;

/// What a caller-supplied string turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathExpression {
    /// `scheme://...`; passed through verbatim.
    Url(String),
    /// An existing directory (absolute); means every file in it.
    Directory(PathBuf),
    /// Directory plus a basename pattern (literal name or glob).
    Pattern { dir: PathBuf, pattern: String },
    /// Can never name a path (contains a NUL byte); reported as a warning.
    Invalid(String),
    /// Nothing usable (blank input).
    Dropped,
}

impl PathExpression {
    /// Classifies `raw`, resolving relative paths against `base`.
    pub fn classify<F: Filesystem>(raw: &str, base: &Path, fs: &F) -> Self {
        if raw.contains('\0') {
            return PathExpression::Invalid(raw.to_string());
        }
        if raw.trim().is_empty() {
            return PathExpression::Dropped;
        }
        if is_url(raw) {
            if let Err(e) = url::Url::parse(raw) {
                tracing::debug!("passing through malformed url {:?}: {}", raw, e);
            }
            return PathExpression::Url(raw.to_string());
        }

        let abs = absolutize(base, raw);
        if fs.is_dir(&abs) {
            return PathExpression::Directory(abs);
        }
        match (abs.parent(), abs.file_name()) {
            (Some(dir), Some(name)) if !dir.as_os_str().is_empty() => PathExpression::Pattern {
                dir: dir.to_path_buf(),
                pattern: name.to_string_lossy().into_owned(),
            },
            _ => PathExpression::Dropped,
        }
    }
}

/// Starts with `scheme://`, the scheme being a letter followed by at least one
/// letter, digit, `+`, `-` or `.`. One-letter schemes are drive letters, so
/// `C://x` is a path. The rest of the string is not inspected.
pub fn is_url(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_with_letter
        && scheme.len() > 1
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
