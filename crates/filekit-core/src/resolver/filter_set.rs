use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use super::fs::Filesystem;
use super::result::{push_warning, ResolveWarning};

/// Basename patterns requested per absolute directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: BTreeMap<PathBuf, BTreeSet<String>>,
}

impl FilterSet {
    pub fn add(&mut self, dir: PathBuf, pattern: impl Into<String>) {
        self.entries.entry(dir).or_default().insert(pattern.into());
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    fn patterns(&self, dir: &std::path::Path) -> Option<&BTreeSet<String>> {
        self.entries.get(dir)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &BTreeSet<String>)> {
        self.entries.iter()
    }

    /// Drops directories that do not exist, recording a warning for each
    /// unless `suppress_errors` is set.
    pub(super) fn retain_existing<F: Filesystem>(
        &mut self,
        fs: &F,
        suppress_errors: bool,
        warnings: &mut Vec<ResolveWarning>,
    ) {
        self.entries.retain(|dir, _| {
            if fs.is_dir(dir) {
                return true;
            }
            if suppress_errors {
                tracing::debug!("skipping missing folder {}", dir.display());
            } else {
                push_warning(warnings, ResolveWarning::MissingDirectory(dir.clone()));
            }
            false
        });
    }
}
