//! Unsafe character set and the validated replacement character.

/// Characters replaced by the replacement character.
pub(crate) const SEPARATOR_CHARS: &[char] = &[
    '\\', '%', ':', '_', '/', '?', '-', '#', '*', ' ', '[', ']',
];

/// Characters removed without replacement: quotes, tabs and the full-width
/// punctuation some downloaders put into titles.
pub(crate) const DROPPED_CHARS: &[char] = &['"', '\'', '\t', '｜', '：', '？'];

pub(crate) const EN_DASH: char = '–';

/// True for every character a sanitized name never contains.
pub fn is_unsafe(c: char) -> bool {
    SEPARATOR_CHARS.contains(&c) || DROPPED_CHARS.contains(&c)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("replacement character {0:?} is itself unsafe or would be rewritten")]
    InvalidReplacement(char),
}

/// Character substituted for unsafe characters. Guaranteed not to be unsafe,
/// alphanumeric, whitespace or a control character, so substitution output is
/// stable under re-application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacementChar(char);

impl ReplacementChar {
    pub fn new(c: char) -> Result<Self, SanitizeError> {
        if is_unsafe(c) || c.is_alphanumeric() || c.is_whitespace() || c.is_control() || c == EN_DASH
        {
            return Err(SanitizeError::InvalidReplacement(c));
        }
        Ok(Self(c))
    }

    pub fn get(self) -> char {
        self.0
    }
}

impl Default for ReplacementChar {
    fn default() -> Self {
        Self('.')
    }
}

/// Applies the per-character rules: separators become `repl`, dropped chars vanish.
pub(super) fn replace_unsafe(s: &str, repl: char) -> String {
    s.chars()
        .filter(|c| !DROPPED_CHARS.contains(c))
        .map(|c| if SEPARATOR_CHARS.contains(&c) { repl } else { c })
        .collect()
}
