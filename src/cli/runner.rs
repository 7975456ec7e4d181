//! Command execution

use super::commands::{Cli, Commands};
use crate::client::PageClient;
use crate::config::Settings;
use crate::error::Result;
use crate::export::{export_bookmarks, export_console, export_raw};
use crate::fetch::{FetchOutcome, Fetcher};
use std::path::Path;
use tracing::warn;

/// Executes CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed CLI
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(self) -> Result<()> {
        let settings = self.load_settings()?;

        match self.cli.command {
            Commands::Run {
                ref out_dir,
                page_size,
                no_console,
                no_bookmarks,
                no_raw,
            } => {
                let mut settings = settings;
                if let Some(size) = page_size {
                    settings.fetch.page_size = size;
                }
                let out_dir = out_dir.clone().unwrap_or_else(|| settings.export.out_dir.clone());
                run_export(&settings, &out_dir, !no_console, !no_bookmarks, !no_raw).await
            }
            Commands::Check => run_check(&settings).await,
        }
    }

    fn load_settings(&self) -> Result<Settings> {
        match &self.cli.config_json {
            Some(json) => Settings::from_json_str(json),
            None => Settings::from_file(&self.cli.config),
        }
    }
}

async fn run_export(
    settings: &Settings,
    out_dir: &Path,
    console: bool,
    bookmarks: bool,
    raw: bool,
) -> Result<()> {
    settings.validate()?;

    let client = PageClient::new(settings.client_config())?;
    let mut fetcher = Fetcher::new(client, settings.fetch_config());
    let result = fetcher.run().await;

    let stats = fetcher.stats();
    println!(
        "Fetched {} pages, {} items.",
        stats.pages_fetched, stats.items_fetched
    );

    if let FetchOutcome::Aborted { reason } = &result.outcome {
        warn!("Fetch did not cover the full dataset: {reason}");
        println!("Warning: fetch aborted early ({reason}); exporting the partial result.");
    }

    if console {
        let mut stdout = std::io::stdout().lock();
        export_console(&result, &mut stdout)?;
    }

    if bookmarks {
        println!("Exporting items to bookmarks file...");
        let (path, summary) = export_bookmarks(&result, out_dir)?;
        println!("Exported {}", path.display());
        println!(
            "Skipped {} deleted items not written to the bookmarks file.",
            summary.skipped
        );
    }

    if raw {
        println!("Exporting raw JSON files...");
        let paths = export_raw(&result, out_dir)?;
        println!("Exported {} raw page files.", paths.len());
    }

    Ok(())
}

async fn run_check(settings: &Settings) -> Result<()> {
    settings.validate()?;

    let client = PageClient::new(settings.client_config())?;
    let page = client.probe().await?;

    println!(
        "Credentials OK; provider reports {} saved items.",
        page.total
    );
    Ok(())
}
