//! Small formatting helpers: sizes, timestamped lines, timestamp filenames.

use chrono::NaiveDateTime;

use crate::sanitize::{sanitize, SanitizeOptions};

const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Human-readable size with two decimals and 1024 steps (`1536` → `"1.50 KB"`).
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, SIZE_UNITS[unit])
}

/// `[YYYY-MM-DD HH:MM:SS] text`
pub fn timestamped_line(now: NaiveDateTime, text: &str) -> String {
    format!("[{}] {}", now.format(TIMESTAMP_FORMAT), text)
}

/// Filesystem-safe name built from a timestamp and an optional suffix,
/// e.g. `2024.05.01.12.30.05.download.tmp`.
pub fn timestamp_name(now: NaiveDateTime, suffix: Option<&str>, options: &SanitizeOptions) -> String {
    let stamp = now.format(TIMESTAMP_FORMAT).to_string();
    let raw = match suffix {
        Some(s) if !s.is_empty() => format!("{stamp} {s}"),
        _ => stamp,
    };
    sanitize(&raw, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::ReplacementChar;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 30, 5)
            .unwrap()
    }

    #[test]
    fn sizes() {
        assert_eq!(human_size(0), "0.00 B");
        assert_eq!(human_size(1023), "1023.00 B");
        assert_eq!(human_size(1536), "1.50 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(human_size(3 * 1024u64.pow(5)), "3072.00 TB");
    }

    #[test]
    fn line_has_bracketed_timestamp() {
        assert_eq!(
            timestamped_line(at(), "File 1 / 2"),
            "[2024-05-01 12:30:05] File 1 / 2"
        );
    }

    #[test]
    fn timestamp_names_are_safe() {
        let opts = SanitizeOptions::default();
        assert_eq!(timestamp_name(at(), None, &opts), "2024.05.01.12.30.05");
        assert_eq!(
            timestamp_name(at(), Some("download.tmp"), &opts),
            "2024.05.01.12.30.05.download.tmp"
        );
        let plus = SanitizeOptions {
            replacement: ReplacementChar::new('+').unwrap(),
            ..opts
        };
        assert_eq!(timestamp_name(at(), Some("x"), &plus), "2024+05+01+12+30+05+x");
    }
}
