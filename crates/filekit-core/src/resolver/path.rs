//! Lexical absolute paths.

use std::path::{Component, Path, PathBuf};

/// Joins `raw` onto `base` (unless already absolute) and removes `.` and `..`
/// components without touching the filesystem.
pub(crate) fn absolutize(base: &Path, raw: &str) -> PathBuf {
    let joined = base.join(raw);
    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
