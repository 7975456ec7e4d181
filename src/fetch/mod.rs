//! Fetch loop
//!
//! Drives the page client across successive offsets until the
//! provider-reported total is covered, throttling request bursts and
//! accumulating pages in fetch order. A definitive page failure aborts the
//! run and yields whatever was accumulated, tagged as such.

mod types;

pub use types::{FetchConfig, FetchOutcome, FetchResult, FetchStats};

use crate::client::PageClient;
use tracing::{debug, info, warn};

/// Sequential fetcher over the paginated retrieve API
pub struct Fetcher {
    client: PageClient,
    config: FetchConfig,
    stats: FetchStats,
}

impl Fetcher {
    /// Create a fetcher over the given client
    pub fn new(client: PageClient, config: FetchConfig) -> Self {
        Self {
            client,
            config,
            stats: FetchStats::default(),
        }
    }

    /// Counters from the most recent run
    pub fn stats(&self) -> &FetchStats {
        &self.stats
    }

    /// Fetch the full dataset
    ///
    /// The provider's total is only known after the first response; the loop
    /// trusts the most recently observed value (logging when it drifts) and
    /// terminates once the next offset reaches it. A definitive failure
    /// returns the pages accumulated so far rather than an error.
    pub async fn run(&mut self) -> FetchResult {
        let mut offset: u64 = 0;
        let mut total: u64 = 0;
        let mut pages = Vec::new();
        let mut burst_countdown = self.config.requests_per_burst;

        loop {
            let page = match self.client.fetch_page(self.config.page_size, offset).await {
                Ok(page) => page,
                Err(e) => {
                    warn!("Aborting fetch at offset {offset}: {e}");
                    return FetchResult {
                        pages,
                        outcome: FetchOutcome::Aborted {
                            reason: e.to_string(),
                        },
                    };
                }
            };

            if total != 0 && page.total != total {
                warn!(
                    "Provider total changed from {total} to {} mid-run; trusting the new value",
                    page.total
                );
                self.stats.total_drifts += 1;
            }
            // Last writer wins; no cross-page reconciliation
            total = page.total;
            offset += u64::from(self.config.page_size);

            self.stats.pages_fetched += 1;
            self.stats.items_fetched += page.list.len() as u64;

            if total > 0 {
                let percent = offset.min(total) * 100 / total;
                info!(
                    "{percent}% | fetched {} items, total {total}, next offset {offset}",
                    page.list.len()
                );
            } else {
                debug!("Page at offset 0 reported no total");
            }

            pages.push(page);

            burst_countdown -= 1;
            if burst_countdown == 0 {
                info!(
                    "Pausing {:?} before the next burst of requests",
                    self.config.burst_pause
                );
                tokio::time::sleep(self.config.burst_pause).await;
                self.stats.pauses_taken += 1;
                burst_countdown = self.config.requests_per_burst;
            }

            if offset >= total {
                return FetchResult {
                    pages,
                    outcome: FetchOutcome::Complete,
                };
            }
        }
    }
}
