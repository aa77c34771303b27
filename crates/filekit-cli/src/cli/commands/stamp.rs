//! `filekit stamp` – print a timestamp usable as a file name.

use anyhow::Result;
use filekit_core::config::FilekitConfig;
use filekit_core::format::timestamp_name;

pub fn run_stamp(cfg: &FilekitConfig, suffix: Option<&str>) -> Result<()> {
    let now = chrono::Local::now().naive_local();
    println!("{}", timestamp_name(now, suffix, &cfg.sanitize_options()?));
    Ok(())
}
