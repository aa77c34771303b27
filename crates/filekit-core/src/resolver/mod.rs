//! Path expression resolution.
//!
//! Turns a mixed list of files, directories, glob patterns and URLs into one
//! deterministic list: local files deduplicated and sorted, URLs appended in
//! input order. Missing or unreadable directories become warnings instead of
//! errors so one bad entry does not abort a batch. Resolution itself never
//! fails.

mod expand;
mod expression;
mod filter_set;
mod fs;
mod order;
mod path;
mod result;

pub use expression::{is_url, PathExpression};
pub use filter_set::FilterSet;
pub use fs::{Filesystem, LocalFilesystem, MATCH_OPTIONS};
pub use order::{natural_cmp, SortOrder};
pub use result::{ResolveWarning, ResolvedFileList, WARNING_TARGET};

use std::path::{Path, PathBuf};

use result::push_warning;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Apply the patterns in every subdirectory as well.
    pub recursive: bool,
    /// Do not report directories that do not exist.
    pub suppress_errors: bool,
    pub order: SortOrder,
}

/// Resolver over a [`Filesystem`].
#[derive(Debug, Clone, Default)]
pub struct Resolver<F = LocalFilesystem> {
    fs: F,
    options: ResolveOptions,
}

impl Resolver<LocalFilesystem> {
    pub fn new(options: ResolveOptions) -> Self {
        Self::with_filesystem(LocalFilesystem, options)
    }
}

impl<F: Filesystem> Resolver<F> {
    pub fn with_filesystem(fs: F, options: ResolveOptions) -> Self {
        Self { fs, options }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolves expressions relative to the current directory.
    pub fn resolve<I, S>(&self, expressions: I) -> ResolvedFileList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base = std::env::current_dir().unwrap_or_else(|e| {
            tracing::warn!("current directory unavailable ({}); relative paths stay relative", e);
            PathBuf::new()
        });
        self.resolve_in(&base, expressions)
    }

    /// Resolves expressions, joining relative ones onto `base`.
    pub fn resolve_in<I, S>(
        &self,
        base: &Path,
        expressions: I,
    ) -> ResolvedFileList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut urls = Vec::new();
        let mut filters = FilterSet::default();
        let mut warnings = Vec::new();

        for raw in expressions {
            let raw = raw.as_ref();
            match PathExpression::classify(raw, base, &self.fs) {
                PathExpression::Url(url) => {
                    tracing::debug!("url: {}", url);
                    urls.push(url);
                }
                PathExpression::Directory(dir) => {
                    tracing::debug!("folder: {}", dir.display());
                    filters.add(dir, "*");
                }
                PathExpression::Pattern { dir, pattern } => {
                    tracing::debug!("split {:?} into {} + {}", raw, dir.display(), pattern);
                    filters.add(dir, pattern);
                }
                PathExpression::Invalid(raw) => {
                    push_warning(&mut warnings, ResolveWarning::InvalidExpression(raw));
                }
                PathExpression::Dropped => tracing::debug!("ignoring expression {:?}", raw),
            }
        }

        filters.retain_existing(&self.fs, self.options.suppress_errors, &mut warnings);
        tracing::debug!("file filters: {:?}", filters);

        let files = expand::expand_filters(&self.fs, &filters, self.options.recursive, &mut warnings);
        let files = self.options.order.sort_paths(files);

        ResolvedFileList {
            files,
            urls,
            warnings,
        }
    }
}

/// Resolves `expressions` against the real filesystem and current directory.
///
/// # Examples
///
/// - `resolve(["*.txt"], &Default::default())` → every `.txt` file in the current directory
/// - `resolve(["https://example.com/x", "docs"], &Default::default())` → files in `docs`, then the URL
pub fn resolve<I, S>(expressions: I, options: &ResolveOptions) -> ResolvedFileList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Resolver::new(*options).resolve(expressions)
}
