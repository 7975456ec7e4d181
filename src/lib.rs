//! # pocket-export
//!
//! Exports a Pocket saved-article list via the paginated v3 retrieve API and
//! emits three output forms: a console listing, a Netscape bookmarks file,
//! and raw per-page JSON archives.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                        Runner                           │
//! │  settings → fetch → console / bookmarks / raw exports   │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//! ┌──────────────┬───────────┴───────────┬─────────────────┐
//! │ Fetch Loop   │      Page Client      │    Exporters    │
//! ├──────────────┼───────────────────────┼─────────────────┤
//! │ offset walk  │ POST /v3/get          │ console listing │
//! │ total track  │ bounded retry (3x/1s) │ bookmarks HTML  │
//! │ burst pause  │ raw body retention    │ raw archives    │
//! └──────────────┴───────────────────────┴─────────────────┘
//! ```
//!
//! The fetch loop is strictly sequential: the dataset total is only known
//! after the first response, pages are accumulated in fetch order, and a
//! page whose retries are exhausted aborts the run with the partial result.

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Core data types for the retrieve API
pub mod types;

/// Settings loading and validation
pub mod config;

/// Single-page client with bounded retry
pub mod client;

/// Pagination fetch loop
pub mod fetch;

/// Console, bookmarks, and raw-archive exporters
pub mod export;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
