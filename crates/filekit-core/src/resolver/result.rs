//! Resolution output and the non-fatal problems found on the way.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// Tracing target of resolver warnings. Front ends that print
/// [`ResolvedFileList::warnings`] themselves can filter it out.
pub const WARNING_TARGET: &str = "filekit::resolve";

/// Problems that do not abort resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveWarning {
    /// An expression pointed into a directory that does not exist.
    MissingDirectory(PathBuf),
    /// A directory could not be listed during recursive expansion.
    UnreadableDirectory { path: PathBuf, reason: String },
    /// The glob engine rejected a pattern (e.g. `a**b`).
    InvalidPattern { pattern: String, reason: String },
    /// An expression that can never name a path (contains a NUL byte).
    InvalidExpression(String),
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveWarning::MissingDirectory(path) => {
                write!(f, "could not find folder \"{}\"", path.display())
            }
            ResolveWarning::UnreadableDirectory { path, reason } => {
                write!(
                    f,
                    "could not open \"{}\" for file listing: {}",
                    path.display(),
                    reason
                )
            }
            ResolveWarning::InvalidPattern { pattern, reason } => {
                write!(f, "invalid pattern \"{}\": {}", pattern, reason)
            }
            ResolveWarning::InvalidExpression(raw) => {
                write!(f, "skipping {:?}: contains a NUL byte", raw)
            }
        }
    }
}

/// Logs the warning and keeps it for the caller; repeats are dropped.
pub(super) fn push_warning(warnings: &mut Vec<ResolveWarning>, warning: ResolveWarning) {
    if warnings.contains(&warning) {
        return;
    }
    tracing::warn!(target: WARNING_TARGET, "{}", warning);
    warnings.push(warning);
}

/// Sorted, deduplicated local files followed by URL inputs in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFileList {
    pub(super) files: Vec<PathBuf>,
    pub(super) urls: Vec<String>,
    pub(super) warnings: Vec<ResolveWarning>,
}

impl ResolvedFileList {
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn warnings(&self) -> &[ResolveWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.files.len() + self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.urls.is_empty()
    }

    /// Every entry as a string: files first, then URLs.
    pub fn entries(&self) -> impl Iterator<Item = Cow<'_, str>> + '_ {
        self.files
            .iter()
            .map(|p| p.to_string_lossy())
            .chain(self.urls.iter().map(|u| Cow::Borrowed(u.as_str())))
    }

    pub fn into_strings(self) -> Vec<String> {
        self.entries().map(Cow::into_owned).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_put_urls_last() {
        let list = ResolvedFileList {
            files: vec![PathBuf::from("/a/1.txt"), PathBuf::from("/a/2.txt")],
            urls: vec!["https://example.com/x".to_string()],
            warnings: Vec::new(),
        };
        assert_eq!(list.len(), 3);
        assert_eq!(
            list.into_strings(),
            vec!["/a/1.txt", "/a/2.txt", "https://example.com/x"]
        );
    }

    #[test]
    fn warning_messages_name_the_directory() {
        let w = ResolveWarning::MissingDirectory(PathBuf::from("/nope"));
        assert_eq!(w.to_string(), "could not find folder \"/nope\"");
        let w = ResolveWarning::UnreadableDirectory {
            path: PathBuf::from("/locked"),
            reason: "denied".to_string(),
        };
        assert!(w.to_string().contains("/locked"));
    }

    #[test]
    fn repeated_warning_is_kept_once() {
        let mut warnings = Vec::new();
        let locked = ResolveWarning::UnreadableDirectory {
            path: PathBuf::from("/locked"),
            reason: "denied".to_string(),
        };
        push_warning(&mut warnings, locked.clone());
        push_warning(&mut warnings, locked.clone());
        push_warning(&mut warnings, ResolveWarning::InvalidExpression("a\0".to_string()));
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0], locked);
    }
}
