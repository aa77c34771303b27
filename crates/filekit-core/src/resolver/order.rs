//! Output ordering: natural (digit runs compared by value) or plain.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::path::PathBuf;
use std::str::Chars;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// `file2` sorts before `file10`.
    #[default]
    Natural,
    /// Plain string order.
    Lexicographic,
}

impl SortOrder {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            SortOrder::Natural => natural_cmp(a, b),
            SortOrder::Lexicographic => a.cmp(b),
        }
    }

    /// Deduplicates and sorts paths by their string form.
    pub(crate) fn sort_paths(self, mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.sort();
        paths.dedup();
        paths.sort_by(|a, b| self.compare(&a.to_string_lossy(), &b.to_string_lossy()));
        paths
    }
}

/// Compares strings treating runs of ASCII digits as numbers.
///
/// Strings whose runs compare equal (`a01` vs `a1`) fall back to plain
/// byte order, so the result is a total order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let ord = compare_numbers(&take_digits(&mut left), &take_digits(&mut right));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(|c| c.is_ascii_digit()) {
        run.push(c);
    }
    run
}

// Arbitrary length, no integer parsing.
fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
