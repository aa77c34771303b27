//! `filekit resolve` – print the resolved file list.

use anyhow::{Context, Result};
use filekit_core::config::FilekitConfig;
use filekit_core::format::human_size;
use filekit_core::resolver::{ResolveOptions, ResolvedFileList, Resolver, SortOrder};

#[derive(Debug, Clone, Default)]
pub struct ResolveArgs {
    pub recursive: bool,
    pub quiet: bool,
    pub lexicographic: bool,
    pub long: bool,
    pub json: bool,
}

/// Config defaults with command-line flags layered on top.
fn merged_options(cfg: &FilekitConfig, args: &ResolveArgs) -> ResolveOptions {
    let mut options = cfg.resolve_options();
    options.recursive |= args.recursive;
    options.suppress_errors |= args.quiet;
    if args.lexicographic {
        options.order = SortOrder::Lexicographic;
    }
    options
}

pub fn run_resolve(cfg: &FilekitConfig, expressions: &[String], args: &ResolveArgs) -> Result<()> {
    let options = merged_options(cfg, args);
    let list = Resolver::new(options).resolve(expressions);
    tracing::debug!(
        "resolved {} expressions into {} entries",
        expressions.len(),
        list.len()
    );
    print_warnings(&list);

    if args.json {
        let out = serde_json::to_string_pretty(&list.into_strings())
            .context("serialize resolved list")?;
        println!("{out}");
    } else if args.long {
        print_long(&list);
    } else {
        for entry in list.entries() {
            println!("{entry}");
        }
    }
    Ok(())
}

pub(crate) fn print_warnings(list: &ResolvedFileList) {
    for warning in list.warnings() {
        eprintln!("warning: {warning}");
    }
}

fn print_long(list: &ResolvedFileList) {
    for file in list.files() {
        let size = std::fs::metadata(file)
            .map(|m| human_size(m.len()))
            .unwrap_or_else(|_| "?".to_string());
        println!("{:>10} {}", size, file.display());
    }
    for url in list.urls() {
        println!("{:>10} {}", "-", url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_extend_config() {
        let cfg = FilekitConfig::default();
        let args = ResolveArgs {
            recursive: true,
            quiet: true,
            lexicographic: true,
            ..ResolveArgs::default()
        };
        let options = merged_options(&cfg, &args);
        assert!(options.recursive);
        assert!(options.suppress_errors);
        assert_eq!(options.order, SortOrder::Lexicographic);
    }

    #[test]
    fn config_applies_without_flags() {
        let mut cfg = FilekitConfig::default();
        cfg.resolve.recursive = true;
        let options = merged_options(&cfg, &ResolveArgs::default());
        assert!(options.recursive);
        assert!(!options.suppress_errors);
        assert_eq!(options.order, SortOrder::Natural);
    }
}
