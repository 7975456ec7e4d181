//! Command-line interface
//!
//! Argument parsing and command execution.

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
