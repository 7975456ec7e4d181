//! Error types for pocket-export
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pocket-export
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required credential: {field}")]
    MissingCredential { field: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Definitive failure for one page: the bounded retry budget ran out.
    #[error("Page fetch failed after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    // ============================================================================
    // Export Errors
    // ============================================================================
    #[error("Export error: {message}")]
    Export { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing credential error
    pub fn missing_credential(field: impl Into<String>) -> Self {
        Self::MissingCredential {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an export error
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    /// Check if this error is the terminal per-page outcome
    /// (retry budget exhausted, the run must not issue further requests)
    pub fn is_definitive(&self) -> bool {
        matches!(self, Error::RetriesExhausted { .. })
    }
}

/// Result type alias for pocket-export
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_credential("consumer_key");
        assert_eq!(err.to_string(), "Missing required credential: consumer_key");

        let err = Error::http_status(503, "unavailable");
        assert_eq!(err.to_string(), "HTTP 503: unavailable");

        let err = Error::RetriesExhausted { attempts: 3 };
        assert_eq!(err.to_string(), "Page fetch failed after 3 attempts");
    }

    #[test]
    fn test_is_definitive() {
        assert!(Error::RetriesExhausted { attempts: 3 }.is_definitive());
        assert!(!Error::http_status(500, "").is_definitive());
        assert!(!Error::config("test").is_definitive());
    }
}
