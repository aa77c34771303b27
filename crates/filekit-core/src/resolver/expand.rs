//! Pattern expansion per directory, optionally through every subdirectory.

use glob::Pattern;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use super::filter_set::FilterSet;
use super::fs::Filesystem;
use super::result::{push_warning, ResolveWarning};

/// Expands every (directory, patterns) pair into matching regular files.
/// The result may contain duplicates and is unordered.
pub(super) fn expand_filters<F: Filesystem>(
    fs: &F,
    filters: &FilterSet,
    recursive: bool,
    warnings: &mut Vec<ResolveWarning>,
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for (dir, patterns) in filters.iter() {
        let patterns = usable_patterns(patterns, warnings);
        if patterns.is_empty() {
            continue;
        }
        expand_tree(fs, dir, &patterns, recursive, &mut files, warnings);
    }
    files
}

// Brackets in scraped names ("[Group] Title.mkv") would otherwise form
// character classes that no longer match the literal name.
fn brackets_to_wildcards(pattern: &str) -> String {
    pattern.replace(['[', ']'], "?")
}

fn usable_patterns(patterns: &BTreeSet<String>, warnings: &mut Vec<ResolveWarning>) -> Vec<String> {
    patterns
        .iter()
        .filter_map(|raw| {
            let pattern = brackets_to_wildcards(raw);
            match Pattern::new(&pattern) {
                Ok(_) => Some(pattern),
                Err(e) => {
                    push_warning(
                        warnings,
                        ResolveWarning::InvalidPattern {
                            pattern: raw.clone(),
                            reason: e.msg.to_string(),
                        },
                    );
                    None
                }
            }
        })
        .collect()
}

/// Full pattern for `pattern` inside `dir`, with the directory part escaped.
fn pattern_in_dir(dir: &Path, pattern: &str) -> Option<Pattern> {
    let mut full = Pattern::escape(&dir.to_string_lossy());
    if !full.ends_with(MAIN_SEPARATOR) {
        full.push(MAIN_SEPARATOR);
    }
    full.push_str(pattern);
    Pattern::new(&full).ok()
}

fn expand_tree<F: Filesystem>(
    fs: &F,
    root: &Path,
    patterns: &[String],
    recursive: bool,
    files: &mut Vec<PathBuf>,
    warnings: &mut Vec<ResolveWarning>,
) {
    let mut visited = HashSet::new();
    visited.insert(fs.canonicalize(root));
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for pattern in patterns {
            if let Some(full) = pattern_in_dir(&dir, pattern) {
                files.extend(fs.glob_files(&full, warnings));
            }
        }
        if !recursive {
            continue;
        }
        match fs.list_dir(&dir) {
            Ok(children) => {
                for child in children {
                    // Symlinked directories are followed, but each real directory once.
                    if fs.is_dir(&child) && visited.insert(fs.canonicalize(&child)) {
                        pending.push(child);
                    }
                }
            }
            Err(e) => push_warning(
                warnings,
                ResolveWarning::UnreadableDirectory {
                    path: dir.clone(),
                    reason: e.to_string(),
                },
            ),
        }
    }
}
