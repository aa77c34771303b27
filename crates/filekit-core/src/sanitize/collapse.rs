//! Separator collapsing.

use super::replacement::EN_DASH;

/// Turns a period glued to an en dash (`.–` or `–.`) into one replacement char.
pub(super) fn replace_dash_pairs(s: &str, repl: char) -> String {
    let repl = repl.to_string();
    s.replace(&format!(".{EN_DASH}"), &repl)
        .replace(&format!("{EN_DASH}."), &repl)
}

/// Collapses doubled replacement chars, spaces and periods into one
/// replacement char until no doubled sequence is left.
pub(super) fn collapse_runs(s: &str, repl: char) -> String {
    let single = repl.to_string();
    let doubled = [format!("{repl}{repl}"), "  ".to_string(), "..".to_string()];

    let mut current = s.to_string();
    loop {
        let next = doubled
            .iter()
            .fold(current.clone(), |acc, pair| acc.replace(pair.as_str(), &single));
        if next == current {
            return current;
        }
        current = next;
    }
}
