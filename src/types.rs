//! Core data types for the Pocket retrieve API
//!
//! This module contains the typed view of a Pocket response page and the
//! lenient deserializers it needs. The provider is inconsistent about
//! number-vs-string encoding, and an empty library comes back with `list`
//! as an empty array rather than an object, so every numeric field and the
//! item map are parsed best-effort.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

// ============================================================================
// Item Status
// ============================================================================

/// Lifecycle status of a saved item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemStatus {
    /// Normal, unread item
    #[default]
    Unread,
    /// Archived by the user
    Archived,
    /// Deleted; excluded from bookmarks export
    Deleted,
}

impl From<u64> for ItemStatus {
    fn from(value: u64) -> Self {
        match value {
            1 => Self::Archived,
            2 => Self::Deleted,
            // Unknown values degrade to unread rather than dropping the item
            _ => Self::Unread,
        }
    }
}

impl ItemStatus {
    /// Numeric wire value
    pub fn as_u64(self) -> u64 {
        match self {
            Self::Unread => 0,
            Self::Archived => 1,
            Self::Deleted => 2,
        }
    }
}

impl Serialize for ItemStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.as_u64())
    }
}

impl<'de> Deserialize<'de> for ItemStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from(lenient_u64(&Value::deserialize(deserializer)?)))
    }
}

// ============================================================================
// Tag
// ============================================================================

/// Metadata attached to a tag on an item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tag {
    /// Item the tag belongs to
    #[serde(default)]
    pub item_id: Option<String>,
    /// Tag name as reported by the provider
    #[serde(default)]
    pub tag: Option<String>,
}

// ============================================================================
// Item
// ============================================================================

/// One saved entry in the user's library
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    /// Opaque item identifier
    #[serde(default)]
    pub item_id: String,

    /// Lifecycle status (0 = unread, 1 = archived, 2 = deleted)
    #[serde(default)]
    pub status: ItemStatus,

    /// Best-known canonical title
    #[serde(default)]
    pub resolved_title: Option<String>,

    /// Best-known canonical URL
    #[serde(default)]
    pub resolved_url: Option<String>,

    /// Title as saved by the user; used for the bookmarks export
    #[serde(default)]
    pub given_title: String,

    /// URL as saved by the user; used for the bookmarks export
    #[serde(default)]
    pub given_url: String,

    /// Unix timestamp (string-encoded) when the item was added
    #[serde(default)]
    pub time_added: String,

    /// Unix timestamp (string-encoded) when the item was last updated
    #[serde(default)]
    pub time_updated: String,

    /// Tags keyed by tag name
    #[serde(default, deserialize_with = "lenient_map")]
    pub tags: HashMap<String, Tag>,
}

impl Item {
    /// Comma-joined tag names for the bookmarks `TAGS` attribute
    pub fn tag_list(&self) -> String {
        let mut names: Vec<&str> = self.tags.keys().map(String::as_str).collect();
        names.sort_unstable();
        names.join(",")
    }
}

// ============================================================================
// Page
// ============================================================================

/// Typed fields of a retrieve response, parsed best-effort
#[derive(Debug, Clone, Default, Deserialize)]
struct PageBody {
    #[serde(default, deserialize_with = "lenient_map")]
    list: HashMap<String, Item>,
    #[serde(default, deserialize_with = "lenient_number")]
    total: u64,
    #[serde(default, deserialize_with = "lenient_number")]
    count: u64,
}

/// One retrieve response: typed view plus the untouched body
///
/// The raw body is captured before any parsing and is retained even when the
/// typed fields fall back to defaults; the raw-archive export depends on it
/// byte-for-byte.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Items keyed by `item_id`
    pub list: HashMap<String, Item>,
    /// Provider's claimed grand total of matching items
    pub total: u64,
    /// Number of items in this page
    pub count: u64,
    /// Verbatim response body
    pub raw: String,
}

impl Page {
    /// Parse a raw response body into a page
    ///
    /// A malformed 2xx body never fails: the typed fields default and the
    /// raw body is kept as-is.
    pub fn parse(raw: String) -> Self {
        let body: PageBody = match serde_json::from_str(&raw) {
            Ok(body) => body,
            Err(e) => {
                warn!("Response body did not parse as a retrieve page: {e}");
                PageBody::default()
            }
        };

        Self {
            list: body.list,
            total: body.total,
            count: body.count,
            raw,
        }
    }

    /// Iterate over the items in this page
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.list.values()
    }

    /// Check whether the page carries no items
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

// ============================================================================
// Lenient deserializers
// ============================================================================

/// Interpret a JSON value as u64, accepting numbers and numeric strings
fn lenient_u64(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(lenient_u64(&Value::deserialize(deserializer)?))
}

/// Deserialize a JSON object into a map, treating anything else as empty
///
/// Pocket returns `"list": []` for an empty library.
fn lenient_map<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Object(_) => serde_json::from_value(value).map_err(serde::de::Error::custom),
        _ => Ok(HashMap::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_from_wire_values() {
        assert_eq!(ItemStatus::from(0), ItemStatus::Unread);
        assert_eq!(ItemStatus::from(1), ItemStatus::Archived);
        assert_eq!(ItemStatus::from(2), ItemStatus::Deleted);
        assert_eq!(ItemStatus::from(99), ItemStatus::Unread);
    }

    #[test]
    fn test_item_status_accepts_string_and_number() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "item_id": "1", "status": "2"
        }))
        .unwrap();
        assert_eq!(item.status, ItemStatus::Deleted);

        let item: Item = serde_json::from_value(serde_json::json!({
            "item_id": "1", "status": 1
        }))
        .unwrap();
        assert_eq!(item.status, ItemStatus::Archived);
    }

    #[test]
    fn test_page_parse_complete_response() {
        let raw = serde_json::json!({
            "list": {
                "229279689": {
                    "item_id": "229279689",
                    "status": "0",
                    "resolved_title": "The Velveteen Rabbit",
                    "resolved_url": "http://example.com/rabbit",
                    "given_title": "Velveteen Rabbit",
                    "given_url": "http://example.com/rabbit?ref=saved",
                    "time_added": "1619107885",
                    "time_updated": "1619107885",
                    "tags": {
                        "fiction": {"item_id": "229279689", "tag": "fiction"}
                    }
                }
            },
            "total": "42",
            "count": 1
        })
        .to_string();

        let page = Page::parse(raw.clone());
        assert_eq!(page.total, 42);
        assert_eq!(page.count, 1);
        assert_eq!(page.raw, raw);

        let item = &page.list["229279689"];
        assert_eq!(item.item_id, "229279689");
        assert_eq!(item.status, ItemStatus::Unread);
        assert_eq!(item.given_url, "http://example.com/rabbit?ref=saved");
        assert_eq!(item.tag_list(), "fiction");
    }

    #[test]
    fn test_page_parse_empty_list_as_array() {
        let page = Page::parse(r#"{"list": [], "total": 0, "count": 0}"#.to_string());
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_page_parse_malformed_body_keeps_raw() {
        let page = Page::parse("not json at all".to_string());
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.count, 0);
        assert_eq!(page.raw, "not json at all");
    }

    #[test]
    fn test_tag_list_is_sorted_and_comma_joined() {
        let mut item = Item::default();
        item.tags.insert("rust".to_string(), Tag::default());
        item.tags.insert("async".to_string(), Tag::default());
        assert_eq!(item.tag_list(), "async,rust");
    }

    #[test]
    fn test_missing_fields_default() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "item_id": "5"
        }))
        .unwrap();
        assert_eq!(item.status, ItemStatus::Unread);
        assert_eq!(item.given_title, "");
        assert!(item.tags.is_empty());
        assert!(item.resolved_title.is_none());
    }
}
