//! Fetch loop types

use crate::types::{Item, Page};
use std::time::Duration;

/// Configuration for the fetch loop
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Items requested per page
    pub page_size: u32,
    /// Successful fetches between throttle pauses
    ///
    /// Kept as a separate knob from `page_size`; the default cadence of one
    /// pause per `page_size` requests is what the provider tolerates.
    pub requests_per_burst: u32,
    /// Pause inserted between bursts
    pub burst_pause: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_size: 15,
            requests_per_burst: 15,
            burst_pause: Duration::from_secs(10),
        }
    }
}

impl FetchConfig {
    /// Set the page size
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Set the burst length
    #[must_use]
    pub fn requests_per_burst(mut self, requests: u32) -> Self {
        self.requests_per_burst = requests;
        self
    }

    /// Set the pause between bursts
    #[must_use]
    pub fn burst_pause(mut self, pause: Duration) -> Self {
        self.burst_pause = pause;
        self
    }
}

/// How a fetch run ended
///
/// Distinguishes "the provider has zero items" (a `Complete` run with no
/// pages of content) from "the first request failed definitively" (an
/// `Aborted` run with no pages), which the page sequence alone cannot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Every page up to the provider-reported total was fetched
    Complete,
    /// Retries were exhausted mid-run; the page sequence is a strict prefix
    Aborted {
        /// Human-readable abort reason
        reason: String,
    },
}

impl FetchOutcome {
    /// Check whether the run covered the full dataset
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Ordered pages accumulated by a fetch run
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// Pages in fetch order; appended once, never mutated
    pub pages: Vec<Page>,
    /// How the run ended
    pub outcome: FetchOutcome,
}

impl FetchResult {
    /// Number of pages fetched
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of items across all pages
    pub fn item_count(&self) -> usize {
        self.pages.iter().map(|p| p.list.len()).sum()
    }

    /// Iterate over all items in page order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.pages.iter().flat_map(Page::items)
    }
}

/// Counters accumulated during a fetch run
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchStats {
    /// Pages fetched successfully
    pub pages_fetched: u64,
    /// Items seen across all pages
    pub items_fetched: u64,
    /// Throttle pauses taken
    pub pauses_taken: u64,
    /// Times the provider-reported total changed between pages
    pub total_drifts: u64,
}
