//! User interface
//!
//! CLI parsing and shell completion generation.

pub mod cli;
pub mod completion;

pub use cli::{Cli, Commands, cli_to_config};
pub use completion::print_completions;
