use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::BatchOptions;
use crate::resolver::{ResolveOptions, SortOrder};
use crate::sanitize::{ReplacementChar, SanitizeOptions};

/// `[sanitize]` section: defaults for the `sanitize` command and derived filenames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeConfig {
    /// Keep locale letters such as `å` and `ö` instead of folding them to ASCII.
    pub allow_extended_chars: bool,
    /// Rewrite season/episode phrases and tags to `SxxEyy`.
    pub fix_episode_tags: bool,
    /// Character that replaces unsafe characters.
    pub replacement_char: char,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            allow_extended_chars: false,
            fix_episode_tags: true,
            replacement_char: '.',
        }
    }
}

/// `[resolve]` section: defaults for path expression resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Apply patterns in every subdirectory too.
    pub recursive: bool,
    /// Do not report directories that do not exist.
    pub suppress_errors: bool,
    /// Compare digit runs numerically when sorting (`file2` before `file10`).
    pub natural_sort: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            suppress_errors: false,
            natural_sort: true,
        }
    }
}

/// `[batch]` section: defaults for `for-each`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Token replaced by the current item in the command template.
    pub placeholder: String,
    /// Continue with the next item after a failed command.
    pub keep_going: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            placeholder: "%file".to_string(),
            keep_going: true,
        }
    }
}

/// Global configuration loaded from `~/.config/filekit/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilekitConfig {
    pub sanitize: SanitizeConfig,
    pub resolve: ResolveConfig,
    pub batch: BatchConfig,
}

impl FilekitConfig {
    /// Sanitizer options; fails if `replacement_char` is itself unsafe.
    pub fn sanitize_options(&self) -> Result<SanitizeOptions> {
        let replacement = ReplacementChar::new(self.sanitize.replacement_char)
            .context("invalid [sanitize] replacement_char")?;
        Ok(SanitizeOptions {
            allow_extended_chars: self.sanitize.allow_extended_chars,
            fix_episode_tags: self.sanitize.fix_episode_tags,
            replacement,
        })
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            recursive: self.resolve.recursive,
            suppress_errors: self.resolve.suppress_errors,
            order: if self.resolve.natural_sort {
                SortOrder::Natural
            } else {
                SortOrder::Lexicographic
            },
        }
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            placeholder: self.batch.placeholder.clone(),
            keep_going: self.batch.keep_going,
            progress_file: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("filekit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FilekitConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<FilekitConfig> {
    if !path.exists() {
        let default_cfg = FilekitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FilekitConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = FilekitConfig::default();
        assert!(!cfg.sanitize.allow_extended_chars);
        assert!(cfg.sanitize.fix_episode_tags);
        assert_eq!(cfg.sanitize.replacement_char, '.');
        assert!(!cfg.resolve.recursive);
        assert!(cfg.resolve.natural_sort);
        assert_eq!(cfg.batch.placeholder, "%file");
        assert!(cfg.batch.keep_going);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FilekitConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FilekitConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_sections() {
        let toml = r#"
            [resolve]
            recursive = true
            natural_sort = false

            [sanitize]
            replacement_char = "+"
        "#;
        let cfg: FilekitConfig = toml::from_str(toml).unwrap();
        assert!(cfg.resolve.recursive);
        assert!(!cfg.resolve.suppress_errors);
        assert_eq!(cfg.resolve_options().order, SortOrder::Lexicographic);
        assert_eq!(cfg.sanitize.replacement_char, '+');
        assert!(cfg.sanitize.fix_episode_tags);
        assert_eq!(cfg.batch, BatchConfig::default());
    }

    #[test]
    fn unsafe_replacement_char_is_rejected() {
        let toml = r#"
            [sanitize]
            replacement_char = "_"
        "#;
        let cfg: FilekitConfig = toml::from_str(toml).unwrap();
        assert!(cfg.sanitize_options().is_err());
    }

    #[test]
    fn load_or_init_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg, FilekitConfig::default());
        assert!(path.exists());

        fs::write(&path, "[batch]\nkeep_going = false\n").unwrap();
        let cfg = load_or_init_at(&path).unwrap();
        assert!(!cfg.batch.keep_going);
        assert_eq!(cfg.batch.placeholder, "%file");
    }
}
