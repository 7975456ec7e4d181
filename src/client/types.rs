//! Wire types for the retrieve endpoint

use serde::Serialize;

/// Request body for the Pocket v3 retrieve call
///
/// The provider expects `count` and `offset` as strings, and `total: "1"`
/// asks it to include the grand total of matching items in the response.
#[derive(Debug, Clone, Serialize)]
pub struct RetrieveRequest {
    /// Application consumer key
    pub consumer_key: String,
    /// User access token
    pub access_token: String,
    /// Level of detail; `complete` includes tags and resolved fields
    #[serde(rename = "detailType")]
    pub detail_type: String,
    /// Page size, string-encoded
    pub count: String,
    /// Zero-based index of the first requested item, string-encoded
    pub offset: String,
    /// Request the provider-side total count
    pub total: String,
    /// Sort order
    pub sort: String,
}

impl RetrieveRequest {
    /// Build a retrieve request for one page
    pub fn new(
        consumer_key: impl Into<String>,
        access_token: impl Into<String>,
        count: u32,
        offset: u64,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            access_token: access_token.into(),
            detail_type: "complete".to_string(),
            count: count.to_string(),
            offset: offset.to_string(),
            total: "1".to_string(),
            sort: "newest".to_string(),
        }
    }
}
