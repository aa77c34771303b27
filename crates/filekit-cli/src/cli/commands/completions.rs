//! `filekit completions` and `filekit man`.

use anyhow::{Context, Result};
use clap::Command;
use clap_complete::Shell;
use std::io;

pub fn run_completions(shell: Shell, mut cmd: Command) -> Result<()> {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

pub fn run_man(cmd: Command) -> Result<()> {
    clap_mangen::Man::new(cmd)
        .render(&mut io::stdout())
        .context("render man page")
}
