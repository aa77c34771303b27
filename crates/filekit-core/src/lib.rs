pub mod config;
pub mod logging;

pub mod batch;
pub mod format;
pub mod resolver;
pub mod sanitize;
