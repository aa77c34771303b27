//! Season/episode tag normalization.

use regex::{Captures, Regex};
use std::sync::LazyLock;

// "Säsong 1 avsnitt 3" as written by Swedish broadcasters.
static SEASON_EPISODE_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)s[aä]song.(\d\d?).avsnitt.(\d\d?)").unwrap());

// S012E5 → S12E5
static PADDED_SEASON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|.)S0(\d\d)E(\d{1,3})").unwrap());

// S12E010 → S12E10
static PADDED_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(^|.)S(\d\d)E0(\d\d)").unwrap());

/// Rewrites season/episode phrases and over-padded tags into `SxxEyy`.
///
/// Padded tags are only touched at the start of the name or right after the
/// replacement character, so words like `xs012e1` stay as they are.
pub(super) fn fix_episode_tags(s: &str, repl: char) -> String {
    let s = SEASON_EPISODE_PHRASE.replace_all(s, |caps: &Captures| {
        format!("S0{}E0{}", &caps[1], &caps[2])
    });
    let s = rewrite_after_separator(&PADDED_SEASON, &s, repl);
    rewrite_after_separator(&PADDED_EPISODE, &s, repl)
}

fn rewrite_after_separator(re: &Regex, s: &str, repl: char) -> String {
    re.replace_all(s, |caps: &Captures| {
        let prefix = &caps[1];
        let at_boundary = prefix.is_empty() || prefix.chars().eq(std::iter::once(repl));
        if at_boundary {
            format!("{}S{}E{}", prefix, &caps[2], &caps[3])
        } else {
            caps[0].to_string()
        }
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swedish_phrase_becomes_tag() {
        assert_eq!(
            fix_episode_tags("Show.sasong.1.avsnitt.3.mkv", '.'),
            "Show.S01E03.mkv"
        );
        assert_eq!(
            fix_episode_tags("Show.Säsong.2.Avsnitt.11", '.'),
            "Show.S02E11"
        );
    }

    #[test]
    fn two_digit_numbers_lose_extra_zero() {
        assert_eq!(
            fix_episode_tags("Show.sasong.12.avsnitt.10", '.'),
            "Show.S12E10"
        );
        assert_eq!(fix_episode_tags("x.s012e005", '.'), "x.S12E05");
        assert_eq!(fix_episode_tags("S01E012.mkv", '.'), "S01E12.mkv");
    }

    #[test]
    fn single_digit_padding_is_kept() {
        assert_eq!(fix_episode_tags("Show.S01E03", '.'), "Show.S01E03");
    }

    #[test]
    fn padded_tags_need_a_separator_before_them() {
        assert_eq!(fix_episode_tags("xS012E10", '.'), "xS012E10");
        assert_eq!(fix_episode_tags("x+S012E10", '+'), "x+S12E10");
        assert_eq!(fix_episode_tags("x.S012E10", '+'), "x.S012E10");
    }
}
