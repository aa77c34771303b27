//! `filekit sanitize` – print a filesystem-safe form of each name.

use anyhow::{Context, Result};
use filekit_core::config::FilekitConfig;
use filekit_core::sanitize::{ReplacementChar, SanitizeOptions, Sanitizer};

#[derive(Debug, Clone, Default)]
pub struct SanitizeArgs {
    pub allow_extended: bool,
    pub no_episode_tags: bool,
    pub replacement: Option<char>,
}

fn merged_options(cfg: &FilekitConfig, args: &SanitizeArgs) -> Result<SanitizeOptions> {
    let mut options = cfg.sanitize_options()?;
    options.allow_extended_chars |= args.allow_extended;
    if args.no_episode_tags {
        options.fix_episode_tags = false;
    }
    if let Some(c) = args.replacement {
        options.replacement =
            ReplacementChar::new(c).with_context(|| format!("--replacement {c:?}"))?;
    }
    Ok(options)
}

pub fn run_sanitize(cfg: &FilekitConfig, names: &[String], args: &SanitizeArgs) -> Result<()> {
    let sanitizer = Sanitizer::new(merged_options(cfg, args)?);
    for name in names {
        println!("{}", sanitizer.sanitize(name));
    }
    Ok(())
}
