//! ASCII folding for the locale letters that show up in Scandinavian titles.

const FOLDS: &[(char, char)] = &[
    ('å', 'a'),
    ('ä', 'a'),
    ('ö', 'o'),
    ('ø', 'o'),
    ('é', 'e'),
    ('è', 'e'),
    ('ü', 'u'),
    ('Å', 'A'),
    ('Ä', 'A'),
    ('Ö', 'O'),
    ('Ø', 'O'),
    ('É', 'E'),
    ('È', 'E'),
    ('Ü', 'U'),
];

fn fold_char(c: char) -> char {
    FOLDS
        .iter()
        .find(|(from, _)| *from == c)
        .map_or(c, |&(_, to)| to)
}

pub(super) fn fold_locale_letters(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_swedish_letters() {
        assert_eq!(fold_locale_letters("Säsong på Öland"), "Sasong pa Oland");
        assert_eq!(fold_locale_letters("ÅÄÖåäö"), "AAOaao");
    }

    #[test]
    fn leaves_other_text_alone() {
        assert_eq!(fold_locale_letters("plain ascii 123"), "plain ascii 123");
        assert_eq!(fold_locale_letters("日本"), "日本");
    }
}
