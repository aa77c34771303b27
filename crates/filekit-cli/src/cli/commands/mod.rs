//! CLI command handlers, one file per command.

mod completions;
mod for_each;
mod resolve;
mod sanitize;
mod stamp;

pub use completions::{run_completions, run_man};
pub use for_each::{run_for_each, ForEachArgs};
pub use resolve::{run_resolve, ResolveArgs};
pub use sanitize::{run_sanitize, SanitizeArgs};
pub use stamp::run_stamp;
