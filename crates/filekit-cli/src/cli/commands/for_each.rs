//! `filekit for-each` – run a command once per resolved file.

use anyhow::{bail, Context, Result};
use filekit_core::batch::{
    items_from_list_file, items_from_reader, items_from_resolved, run_batch, BatchOptions,
    CommandTemplate, STDIN_MARKER,
};
use filekit_core::config::FilekitConfig;
use filekit_core::resolver::Resolver;
use std::io;
use std::path::{Path, PathBuf};

use super::resolve::print_warnings;

#[derive(Debug, Clone, Default)]
pub struct ForEachArgs {
    pub recursive: bool,
    pub list_file: bool,
    pub basename: bool,
    pub progress: Option<PathBuf>,
    pub stop_on_error: bool,
}

fn collect_items(
    cfg: &FilekitConfig,
    expressions: &[String],
    args: &ForEachArgs,
) -> Result<Vec<String>> {
    if expressions.len() == 1 && expressions[0] == STDIN_MARKER {
        return items_from_reader(io::stdin().lock()).context("read items from stdin");
    }

    let mut options = cfg.resolve_options();
    options.recursive |= args.recursive;
    let list = Resolver::new(options).resolve(expressions);
    print_warnings(&list);

    if !args.list_file {
        return Ok(items_from_resolved(&list, args.basename));
    }

    let mut items = Vec::new();
    for file in list.files() {
        items.extend(items_from_list_file(file)?);
    }
    for url in list.urls() {
        tracing::warn!("skipping URL {} given as a list file", url);
    }
    if args.basename {
        items = items.into_iter().map(|item| basename(&item)).collect();
    }
    Ok(items)
}

fn basename(item: &str) -> String {
    Path::new(item)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| item.to_string())
}

pub fn run_for_each(
    cfg: &FilekitConfig,
    expressions: &[String],
    command: Vec<String>,
    args: &ForEachArgs,
) -> Result<()> {
    let template = CommandTemplate::new(command, &cfg.batch.placeholder)?;
    let items = collect_items(cfg, expressions, args)?;
    if items.is_empty() {
        println!("Nothing to do.");
        return Ok(());
    }

    let options = BatchOptions {
        keep_going: cfg.batch.keep_going && !args.stop_on_error,
        progress_file: args.progress.clone(),
        ..cfg.batch_options()
    };
    let report = run_batch(&template, &items, &options)?;

    println!(
        "{} of {} succeeded, {} failed, {} skipped.",
        report.succeeded,
        items.len(),
        report.failures.len(),
        report.skipped
    );
    for failure in &report.failures {
        eprintln!("failed: {} ({})", failure.item, failure.reason);
    }
    if !report.all_succeeded() {
        bail!("{} of {} items failed", report.failures.len(), items.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_files_expand_to_their_lines() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.lst"), "/data/three.wav\n").unwrap();
        std::fs::write(dir.path().join("a.lst"), "/data/one.wav\n\n/data/two.wav\n").unwrap();
        let pattern = dir.path().join("*.lst").to_string_lossy().into_owned();

        let args = ForEachArgs {
            list_file: true,
            ..ForEachArgs::default()
        };
        let items = collect_items(&FilekitConfig::default(), &[pattern.clone()], &args).unwrap();
        assert_eq!(items, vec!["/data/one.wav", "/data/two.wav", "/data/three.wav"]);

        let args = ForEachArgs {
            list_file: true,
            basename: true,
            ..ForEachArgs::default()
        };
        let items = collect_items(&FilekitConfig::default(), &[pattern], &args).unwrap();
        assert_eq!(items, vec!["one.wav", "two.wav", "three.wav"]);
    }

    #[test]
    fn resolved_files_become_items() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("track10.wav"), "").unwrap();
        std::fs::write(dir.path().join("track2.wav"), "").unwrap();
        let pattern = dir.path().join("*.wav").to_string_lossy().into_owned();

        let args = ForEachArgs {
            basename: true,
            ..ForEachArgs::default()
        };
        let items = collect_items(&FilekitConfig::default(), &[pattern], &args).unwrap();
        assert_eq!(items, vec!["track2.wav", "track10.wav"]);
    }

    #[cfg(unix)]
    #[test]
    fn failing_item_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        let pattern = dir.path().join("*.txt").to_string_lossy().into_owned();
        let err = run_for_each(
            &FilekitConfig::default(),
            &[pattern],
            vec!["false".to_string()],
            &ForEachArgs::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("1 of 1 items failed"));
    }
}
