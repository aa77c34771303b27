//! Where batch items come from: resolved files or lists of lines.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::resolver::ResolvedFileList;

/// Marker for "read items from stdin".
pub const STDIN_MARKER: &str = "-";

/// Entries of a resolved list, optionally reduced to their file name.
pub fn items_from_resolved(list: &ResolvedFileList, basename_only: bool) -> Vec<String> {
    let mut items: Vec<String> = list
        .files()
        .iter()
        .map(|path| {
            if basename_only {
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.to_string_lossy().into_owned())
            } else {
                path.to_string_lossy().into_owned()
            }
        })
        .collect();
    items.extend(list.urls().iter().cloned());
    items
}

/// Non-empty trimmed lines.
pub fn items_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            items.push(line.to_string());
        }
    }
    Ok(items)
}

/// Lines of a list file; `-` reads stdin.
pub fn items_from_list_file(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str() == STDIN_MARKER {
        return items_from_reader(io::stdin().lock()).context("read item list from stdin");
    }
    let file = File::open(path).with_context(|| format!("open list file {}", path.display()))?;
    items_from_reader(BufReader::new(file))
        .with_context(|| format!("read list file {}", path.display()))
}
