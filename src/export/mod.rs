//! Exporters over a fetched result
//!
//! All three exporters share read-only access to the same [`FetchResult`]
//! and return explicit summaries instead of mutating process-wide counters.
//! They tolerate empty or truncated results: an aborted run still exports
//! whatever was fetched.

mod bookmarks;
mod console;
mod raw;

pub use bookmarks::{export_bookmarks, render_bookmarks};
pub use console::export_console;
pub use raw::export_raw;

/// Counts reported by an export step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Items written to the output
    pub written: usize,
    /// Items skipped (deleted items, for the bookmarks export)
    pub skipped: usize,
}

/// UTC date prefix used in export file names
pub(crate) fn date_prefix() -> String {
    chrono::Utc::now().format("%Y%m%d").to_string()
}

#[cfg(test)]
mod tests;
