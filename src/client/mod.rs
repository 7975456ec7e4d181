//! Page client for the Pocket retrieve API
//!
//! Performs exactly one logical page fetch per call, hiding transient-failure
//! retry from the caller: any non-2xx status (or transport failure) is
//! retried on a fixed interval up to a fixed attempt budget, after which the
//! fetch fails definitively for this run.

mod types;

pub use types::RetrieveRequest;

use crate::error::{Error, Result};
use crate::types::Page;
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Default Pocket v3 retrieve endpoint
pub const DEFAULT_ENDPOINT: &str = "https://getpocket.com/v3/get";

/// Rate-limit headers the provider returns; observed for diagnostics only
const LIMIT_HEADERS: [&str; 2] = ["X-Limit-User-Remaining", "X-Limit-Key-Remaining"];

/// Configuration for the page client
#[derive(Debug, Clone)]
pub struct PageClientConfig {
    /// Retrieve endpoint URL
    pub endpoint: String,
    /// Application consumer key
    pub consumer_key: String,
    /// User access token
    pub access_token: String,
    /// Total attempts per page, including the first
    pub max_attempts: u32,
    /// Fixed wait between attempts
    pub retry_wait: Duration,
    /// Transport timeout per request
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl PageClientConfig {
    /// Create a config with the given credentials and default tuning
    pub fn new(consumer_key: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            consumer_key: consumer_key.into(),
            access_token: access_token.into(),
            max_attempts: 3,
            retry_wait: Duration::from_secs(1),
            timeout: Duration::from_secs(30),
            user_agent: format!("pocket-export/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Override the retrieve endpoint
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the total attempt budget per page
    #[must_use]
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the wait between retry attempts
    #[must_use]
    pub fn retry_wait(mut self, wait: Duration) -> Self {
        self.retry_wait = wait;
        self
    }

    /// Set the transport timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for single page fetches with bounded retry
pub struct PageClient {
    client: Client,
    config: PageClientConfig,
}

impl PageClient {
    /// Create a new page client
    pub fn new(config: PageClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetch one page of saved items
    ///
    /// Retries any non-success outcome on a fixed interval; when the attempt
    /// budget is exhausted the error is [`Error::RetriesExhausted`], which the
    /// caller must treat as unrecoverable for this run.
    pub async fn fetch_page(&self, page_size: u32, offset: u64) -> Result<Page> {
        if page_size == 0 {
            return Err(Error::config("page_size must be greater than zero"));
        }

        let request = RetrieveRequest::new(
            &self.config.consumer_key,
            &self.config.access_token,
            page_size,
            offset,
        );
        let body = serde_json::to_value(&request)?;

        let mut attempt = 0;
        loop {
            attempt += 1;

            match self.client.post(&self.config.endpoint).json(&body).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        log_limit_headers(response.headers());
                        // Raw body is captured before typed parsing; a
                        // malformed 2xx body still yields a page.
                        let raw = response.text().await?;
                        debug!("Fetched page at offset {offset} on attempt {attempt}");
                        return Ok(Page::parse(raw));
                    }

                    // 4xx and 5xx are not distinguished here: the provider
                    // returns transient 4xx statuses under load.
                    warn!(
                        "Retrieve returned {} at offset {offset}, attempt {attempt}/{}",
                        status.as_u16(),
                        self.config.max_attempts
                    );
                }
                Err(e) => {
                    warn!(
                        "Retrieve transport error at offset {offset}, attempt {attempt}/{}: {e}",
                        self.config.max_attempts
                    );
                }
            }

            if attempt >= self.config.max_attempts {
                return Err(Error::RetriesExhausted {
                    attempts: self.config.max_attempts,
                });
            }

            tokio::time::sleep(self.config.retry_wait).await;
        }
    }

    /// Issue a one-item probe fetch to verify credentials and connectivity
    pub async fn probe(&self) -> Result<Page> {
        self.fetch_page(1, 0).await
    }
}

impl std::fmt::Debug for PageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageClient")
            .field("endpoint", &self.config.endpoint)
            .field("max_attempts", &self.config.max_attempts)
            .finish_non_exhaustive()
    }
}

fn log_limit_headers(headers: &HeaderMap) {
    for name in LIMIT_HEADERS {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            debug!("{name}: {value}");
        }
    }
}
