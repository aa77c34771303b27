//! Progress reporting for batch runs (position, elapsed time, ETA).

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;

use crate::format::timestamped_line;

/// Snapshot taken right before item `index` (1-based) starts.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    pub index: usize,
    pub total: usize,
    /// Elapsed time since the batch started (seconds).
    pub elapsed_secs: f64,
}

impl BatchProgress {
    /// Items finished so far.
    pub fn completed(&self) -> usize {
        self.index.saturating_sub(1)
    }

    /// Fraction complete in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.completed() as f64 / self.total as f64).min(1.0)
    }

    /// Estimated seconds remaining (None until one item has finished).
    pub fn eta_secs(&self) -> Option<f64> {
        let done = self.completed();
        if done == 0 || self.elapsed_secs <= 0.0 {
            return None;
        }
        let per_item = self.elapsed_secs / done as f64;
        Some(per_item * self.total.saturating_sub(done) as f64)
    }

    pub fn describe(&self, item: &str) -> String {
        let eta = match self.eta_secs() {
            Some(secs) => format!("estimated {:.0}m left", secs / 60.0),
            None => "no estimate yet".to_string(),
        };
        format!(
            "File {} / {} ({:.3}%) {}. Have been running for {:.0} seconds. File: \"{}\"",
            self.index,
            self.total,
            self.fraction() * 100.0,
            eta,
            self.elapsed_secs,
            item
        )
    }
}

/// Overwrites `path` with one timestamped progress line.
pub fn write_progress_file(path: &Path, now: NaiveDateTime, line: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create progress dir {}", parent.display()))?;
    }
    fs::write(path, timestamped_line(now, line))
        .with_context(|| format!("write progress file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_has_no_estimate() {
        let p = BatchProgress {
            index: 1,
            total: 4,
            elapsed_secs: 0.0,
        };
        assert_eq!(p.fraction(), 0.0);
        assert!(p.eta_secs().is_none());
        assert!(p.describe("a.txt").contains("no estimate yet"));
    }

    #[test]
    fn eta_from_average_item_time() {
        let p = BatchProgress {
            index: 3,
            total: 4,
            elapsed_secs: 120.0,
        };
        assert_eq!(p.completed(), 2);
        assert!((p.fraction() - 0.5).abs() < 1e-9);
        assert!((p.eta_secs().unwrap() - 120.0).abs() < 1e-9);
        assert_eq!(
            p.describe("c.txt"),
            "File 3 / 4 (50.000%) estimated 2m left. Have been running for 120 seconds. File: \"c.txt\""
        );
    }

    #[test]
    fn progress_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("progress.txt");
        let now = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        write_progress_file(&path, now, "first").unwrap();
        write_progress_file(&path, now, "second").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[2024-01-02 03:04:05] second"
        );
    }
}
