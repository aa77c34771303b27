//! Filesystem-safe names from arbitrary strings.
//!
//! Titles scraped from web pages, URLs and broadcaster naming schemes are
//! turned into names without separators, quotes or wildcard characters.
//! Season/episode phrases become `SxxEyy` tags. The transform is idempotent:
//! sanitizing an already sanitized name returns it unchanged.

mod collapse;
mod fold;
mod replacement;
mod tags;

pub use replacement::{is_unsafe, ReplacementChar, SanitizeError};

use collapse::{collapse_runs, replace_dash_pairs};
use fold::fold_locale_letters;
use replacement::replace_unsafe;
use tags::fix_episode_tags;

const URL_SCHEMES: &[&str] = &["https://", "http://"];

/// Options for [`sanitize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Keep letters like `å` or `ö` instead of folding them to ASCII.
    pub allow_extended_chars: bool,
    /// Rewrite season/episode phrases and over-padded tags.
    pub fix_episode_tags: bool,
    pub replacement: ReplacementChar,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            allow_extended_chars: false,
            fix_episode_tags: true,
            replacement: ReplacementChar::default(),
        }
    }
}

/// Reusable sanitizer bound to one set of options.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    options: SanitizeOptions,
}

impl Sanitizer {
    pub fn new(options: SanitizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SanitizeOptions {
        &self.options
    }

    /// Sanitizes `input`. Windows paths with a drive prefix (`C:\dir\name`)
    /// keep their directory part; only the last component is rewritten.
    pub fn sanitize(&self, input: &str) -> String {
        match split_drive_path(input) {
            Some((dir, basename)) => format!("{}{}", dir, self.sanitize_basename(basename)),
            None => self.sanitize_basename(input),
        }
    }

    fn sanitize_basename(&self, name: &str) -> String {
        let repl = self.options.replacement.get();

        let mut name = if self.options.allow_extended_chars {
            name.to_string()
        } else {
            fold_locale_letters(name)
        };
        for scheme in URL_SCHEMES {
            name = name.replace(scheme, "");
        }
        let mut name = replace_unsafe(&name, repl);

        // Every rewrite below shortens the string, so this terminates.
        loop {
            let mut next = replace_dash_pairs(&name, repl);
            if self.options.fix_episode_tags {
                next = fix_episode_tags(&next, repl);
            }
            let next = collapse_runs(&next, repl);
            if next == name {
                return name;
            }
            name = next;
        }
    }
}

/// Sanitizes `input` with the given options.
///
/// # Examples
///
/// - `sanitize("Show - Säsong 1 avsnitt 3.mkv", &Default::default())` → `"Show.S01E03.mkv"`
/// - `sanitize("https://example.com/a b", &Default::default())` → `"example.com.a.b"`
pub fn sanitize(input: &str, options: &SanitizeOptions) -> String {
    Sanitizer::new(*options).sanitize(input)
}

/// Splits `X:\dir\name` into (`X:\dir\`, `name`) with the drive letter uppercased.
fn split_drive_path(input: &str) -> Option<(String, &str)> {
    let drive = input.chars().next()?;
    if !drive.is_ascii_alphabetic() || !input[1..].starts_with(":\\") {
        return None;
    }
    let split = input.rfind('\\')? + 1;
    let dir = format!("{}{}", drive.to_ascii_uppercase(), &input[1..split]);
    Some((dir, &input[split..]))
}
