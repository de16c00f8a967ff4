//! CLI module - argument parsing and the real terminal console

mod args;
mod prompts;
mod select;

pub use args::{Cli, LogLevel};
pub use prompts::TermConsole;
pub use select::{run_select, translate_key};
