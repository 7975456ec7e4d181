//! Settings loading and validation
//!
//! Settings come from a JSON file (or inline JSON on the command line) and
//! split into credentials, fetch tuning, and export tuning. All tuning
//! fields have defaults matching the provider's documented limits, so a
//! minimal settings file only needs the two credentials.

use crate::client::PageClientConfig;
use crate::error::{Error, Result};
use crate::fetch::FetchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Complete application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Pocket application consumer key
    #[serde(default)]
    pub consumer_key: String,

    /// Pocket user access token
    #[serde(default)]
    pub access_token: String,

    /// Fetch loop tuning
    #[serde(default)]
    pub fetch: FetchSettings,

    /// Export output tuning
    #[serde(default)]
    pub export: ExportSettings,
}

/// Tuning for the page client and fetch loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSettings {
    /// Items requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Successful fetches between throttle pauses; defaults to the
    /// page size, which reproduces the provider-safe cadence of one
    /// pause per `page_size` requests
    #[serde(default)]
    pub requests_per_burst: Option<u32>,

    /// Throttle pause between bursts, in seconds
    #[serde(default = "default_burst_pause_secs")]
    pub burst_pause_secs: u64,

    /// Total attempts per page before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Wait between retry attempts, in seconds
    #[serde(default = "default_retry_wait_secs")]
    pub retry_wait_secs: u64,

    /// Retrieve endpoint override (testing); defaults to the Pocket v3 API
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            requests_per_burst: None,
            burst_pause_secs: default_burst_pause_secs(),
            max_attempts: default_max_attempts(),
            retry_wait_secs: default_retry_wait_secs(),
            endpoint: None,
        }
    }
}

/// Export output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Directory export files are written into
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
        }
    }
}

fn default_page_size() -> u32 {
    15
}

fn default_burst_pause_secs() -> u64 {
    10
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_wait_secs() -> u64 {
    1
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("export")
}

impl Settings {
    /// Load settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read settings file {}: {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Parse settings from an inline JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings)
    }

    /// Check preconditions before any network activity
    ///
    /// Both credentials must be present and non-empty; a missing credential
    /// aborts the run before a single fetch is attempted.
    pub fn validate(&self) -> Result<()> {
        if self.consumer_key.trim().is_empty() {
            return Err(Error::missing_credential("consumer_key"));
        }
        if self.access_token.trim().is_empty() {
            return Err(Error::missing_credential("access_token"));
        }
        if self.fetch.page_size == 0 {
            return Err(Error::config("fetch.page_size must be greater than zero"));
        }
        if self.fetch.max_attempts == 0 {
            return Err(Error::config("fetch.max_attempts must be greater than zero"));
        }
        if self.fetch.requests_per_burst == Some(0) {
            return Err(Error::config(
                "fetch.requests_per_burst must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Build the runtime page client configuration
    pub fn client_config(&self) -> PageClientConfig {
        let mut config = PageClientConfig::new(&self.consumer_key, &self.access_token)
            .max_attempts(self.fetch.max_attempts)
            .retry_wait(Duration::from_secs(self.fetch.retry_wait_secs));
        if let Some(endpoint) = &self.fetch.endpoint {
            config = config.endpoint(endpoint);
        }
        config
    }

    /// Build the runtime fetch loop configuration
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            page_size: self.fetch.page_size,
            requests_per_burst: self
                .fetch
                .requests_per_burst
                .unwrap_or(self.fetch.page_size),
            burst_pause: Duration::from_secs(self.fetch.burst_pause_secs),
        }
    }
}
