//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pocket saved-article exporter CLI
#[derive(Parser, Debug)]
#[command(name = "pocket-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (JSON)
    #[arg(short, long, global = true, default_value = "pocket.json")]
    pub config: PathBuf,

    /// Inline settings JSON (takes precedence over --config)
    #[arg(long, global = true)]
    pub config_json: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the saved-article list and run the exports
    Run {
        /// Directory export files are written into
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Items per page
        #[arg(long)]
        page_size: Option<u32>,

        /// Skip the console listing
        #[arg(long)]
        no_console: bool,

        /// Skip the bookmarks file
        #[arg(long)]
        no_bookmarks: bool,

        /// Skip the raw JSON archives
        #[arg(long)]
        no_raw: bool,
    },

    /// Validate settings and verify credentials with a single probe request
    Check,
}
