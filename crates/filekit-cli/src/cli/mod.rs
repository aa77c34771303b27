//! CLI for filekit.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use filekit_core::config::{self, FilekitConfig};
use std::path::PathBuf;

use commands::{
    run_completions, run_for_each, run_man, run_resolve, run_sanitize, run_stamp, ForEachArgs,
    ResolveArgs, SanitizeArgs,
};

/// Top-level CLI for filekit.
#[derive(Debug, Parser)]
#[command(name = "filekit")]
#[command(about = "filekit: resolve file patterns, sanitize names, run commands per file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Expand files, directories, glob patterns and URLs into a sorted list.
    Resolve {
        /// Files, directories, glob patterns or URLs.
        #[arg(required = true)]
        expressions: Vec<String>,

        /// Apply the patterns in every subdirectory too.
        #[arg(short, long, visible_alias = "subfolders")]
        recursive: bool,

        /// Do not warn about directories that do not exist.
        #[arg(short, long)]
        quiet: bool,

        /// Plain string order instead of natural order.
        #[arg(long)]
        lexicographic: bool,

        /// Prefix each file with its size.
        #[arg(long, conflicts_with = "json")]
        long: bool,

        /// Print a JSON array instead of one entry per line.
        #[arg(long)]
        json: bool,
    },

    /// Turn strings into filesystem-safe names.
    Sanitize {
        /// Names, titles or URLs to sanitize.
        #[arg(required = true)]
        names: Vec<String>,

        /// Keep letters like å, ä and ö.
        #[arg(long)]
        allow_extended: bool,

        /// Leave season/episode phrases as they are.
        #[arg(long)]
        no_episode_tags: bool,

        /// Character that replaces unsafe characters (default from config, usually '.').
        #[arg(long, value_name = "CHAR")]
        replacement: Option<char>,
    },

    /// Run a command once per resolved file: `for-each *.wav -- ffmpeg -i %file %file.mp3`.
    ForEach {
        /// Files, directories, patterns or URLs (`-` reads items from stdin).
        #[arg(required = true)]
        expressions: Vec<String>,

        /// Program and arguments; the placeholder (default `%file`) is replaced by each item.
        #[arg(last = true, required = true)]
        command: Vec<String>,

        /// Look in subdirectories too.
        #[arg(short, long, visible_alias = "subfolders")]
        recursive: bool,

        /// Resolved files are lists; run the command for every line in them.
        #[arg(short, long)]
        list_file: bool,

        /// Pass only the file name, not the full path.
        #[arg(short, long)]
        basename: bool,

        /// Overwrite this file with a progress line before every item.
        #[arg(short, long, value_name = "FILE")]
        progress: Option<PathBuf>,

        /// Stop at the first failing command.
        #[arg(long)]
        stop_on_error: bool,
    },

    /// Print a filesystem-safe timestamp name.
    Stamp {
        /// Optional text appended after the timestamp.
        suffix: Option<String>,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve {
                expressions,
                recursive,
                quiet,
                lexicographic,
                long,
                json,
            } => {
                let args = ResolveArgs {
                    recursive,
                    quiet,
                    lexicographic,
                    long,
                    json,
                };
                run_resolve(&load_config()?, &expressions, &args)?;
            }
            CliCommand::Sanitize {
                names,
                allow_extended,
                no_episode_tags,
                replacement,
            } => {
                let args = SanitizeArgs {
                    allow_extended,
                    no_episode_tags,
                    replacement,
                };
                run_sanitize(&load_config()?, &names, &args)?;
            }
            CliCommand::ForEach {
                expressions,
                command,
                recursive,
                list_file,
                basename,
                progress,
                stop_on_error,
            } => {
                let args = ForEachArgs {
                    recursive,
                    list_file,
                    basename,
                    progress,
                    stop_on_error,
                };
                run_for_each(&load_config()?, &expressions, command, &args)?;
            }
            CliCommand::Stamp { suffix } => run_stamp(&load_config()?, suffix.as_deref())?,
            CliCommand::Completions { shell } => run_completions(shell, Cli::command())?,
            CliCommand::Man => run_man(Cli::command())?,
        }

        Ok(())
    }
}

// Completions and man pages work without a config file.
fn load_config() -> Result<FilekitConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
