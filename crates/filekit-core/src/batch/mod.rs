//! Batch runner: one external command per item.
//!
//! Items come from resolved files or list files. Each command is spawned
//! directly from its argument vector and waited for before the next one
//! starts. Failed items are recorded and, unless configured otherwise, the
//! run continues.

mod progress;
mod source;
mod template;

pub use progress::{write_progress_file, BatchProgress};
pub use source::{items_from_list_file, items_from_reader, items_from_resolved, STDIN_MARKER};
pub use template::{CommandTemplate, TemplateError};

use anyhow::Result;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Token replaced by the item in the command template.
    pub placeholder: String,
    /// Continue after a failed item.
    pub keep_going: bool,
    /// Overwritten with a progress line before each item.
    pub progress_file: Option<PathBuf>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            placeholder: "%file".to_string(),
            keep_going: true,
            progress_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub item: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failures: Vec<BatchFailure>,
    /// Items never started because the run stopped early.
    pub skipped: usize,
}

impl BatchReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty() && self.skipped == 0
    }
}

/// Runs `template` once per item, in order.
///
/// Spawn failures and non-zero exits are per-item failures; only a progress
/// file that cannot be written aborts the run.
pub fn run_batch(
    template: &CommandTemplate,
    items: &[String],
    options: &BatchOptions,
) -> Result<BatchReport> {
    let started = Instant::now();
    let total = items.len();
    let mut report = BatchReport::default();

    for (i, item) in items.iter().enumerate() {
        let progress = BatchProgress {
            index: i + 1,
            total,
            elapsed_secs: started.elapsed().as_secs_f64(),
        };
        let line = progress.describe(item);
        tracing::info!("{}", line);
        if let Some(path) = &options.progress_file {
            write_progress_file(path, chrono::Local::now().naive_local(), &line)?;
        }

        let outcome = match template.command(item).status() {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(format!("exited with {status}")),
            Err(e) => Err(format!("could not start {}: {e}", template.program())),
        };
        match outcome {
            Ok(()) => report.succeeded += 1,
            Err(reason) => {
                tracing::warn!("command for \"{}\" failed: {}", item, reason);
                report.failures.push(BatchFailure {
                    item: item.clone(),
                    reason,
                });
                if !options.keep_going {
                    report.skipped = total - (i + 1);
                    break;
                }
            }
        }
    }

    Ok(report)
}
