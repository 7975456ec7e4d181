//! Tests for the exporters

use super::*;
use crate::fetch::{FetchOutcome, FetchResult};
use crate::types::{Item, ItemStatus, Page, Tag};
use pretty_assertions::assert_eq;
use std::collections::HashMap;

fn item(id: &str, status: ItemStatus) -> Item {
    Item {
        item_id: id.to_string(),
        status,
        resolved_title: Some(format!("Resolved {id}")),
        resolved_url: Some(format!("http://example.com/{id}")),
        given_title: format!("Given {id}"),
        given_url: format!("http://example.com/{id}?saved"),
        time_added: "1619107885".to_string(),
        time_updated: "1619107999".to_string(),
        tags: HashMap::new(),
    }
}

fn page(items: Vec<Item>, raw: &str) -> Page {
    let total = items.len() as u64;
    Page {
        list: items.into_iter().map(|i| (i.item_id.clone(), i)).collect(),
        total,
        count: total,
        raw: raw.to_string(),
    }
}

fn result(pages: Vec<Page>) -> FetchResult {
    FetchResult {
        pages,
        outcome: FetchOutcome::Complete,
    }
}

// ============================================================================
// Console export
// ============================================================================

#[test]
fn test_console_lists_every_item() {
    let result = result(vec![page(
        vec![item("1", ItemStatus::Unread), item("2", ItemStatus::Deleted)],
        "{}",
    )]);

    let mut out = Vec::new();
    let written = export_console(&result, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(written, 2);
    assert!(text.contains("Item ID: 1, Title: Resolved 1, URL: http://example.com/1?saved"));
    // Deleted items are excluded from bookmarks but not from the console view
    assert!(text.contains("Item ID: 2"));
}

#[test]
fn test_console_notes_empty_page() {
    let result = result(vec![page(vec![], "{}")]);

    let mut out = Vec::new();
    let written = export_console(&result, &mut out).unwrap();

    assert_eq!(written, 0);
    assert!(String::from_utf8(out).unwrap().contains("No items found"));
}

#[test]
fn test_console_handles_empty_result() {
    let result = result(vec![]);
    let mut out = Vec::new();
    assert_eq!(export_console(&result, &mut out).unwrap(), 0);
    assert!(out.is_empty());
}

// ============================================================================
// Bookmarks export
// ============================================================================

#[test]
fn test_bookmarks_document_shape() {
    let result = result(vec![page(vec![item("1", ItemStatus::Unread)], "{}")]);
    let (doc, summary) = render_bookmarks(&result);

    assert!(doc.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n"));
    assert!(doc.contains("<TITLE>Bookmarks</TITLE>"));
    assert!(doc.contains("<DL><p>"));
    assert!(doc.ends_with("</DL><p>\n"));
    assert!(doc.contains(
        "<DT><A HREF=\"http://example.com/1?saved\" ADD_DATE=\"1619107885\" \
         LAST_MODIFIED=\"1619107999\" PRIVATE=\"1\" TOREAD=\"0\">Given 1</A>"
    ));
    assert_eq!(summary, ExportSummary { written: 1, skipped: 0 });
}

#[test]
fn test_bookmarks_skips_and_counts_deleted_items() {
    let result = result(vec![page(
        vec![
            item("1", ItemStatus::Unread),
            item("2", ItemStatus::Deleted),
            item("3", ItemStatus::Archived),
        ],
        "{}",
    )]);

    let (doc, summary) = render_bookmarks(&result);

    assert!(!doc.contains("example.com/2"));
    assert!(doc.contains("example.com/1"));
    assert!(doc.contains("example.com/3"));
    assert_eq!(summary.written, 2);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn test_bookmarks_escapes_url_and_title() {
    let mut special = item("1", ItemStatus::Unread);
    special.given_url = "http://example.com/?a=1&b=<2>".to_string();
    special.given_title = "Fish & \"Chips\"".to_string();
    let result = result(vec![page(vec![special], "{}")]);

    let (doc, _) = render_bookmarks(&result);

    assert!(doc.contains("HREF=\"http://example.com/?a=1&amp;b=&lt;2&gt;\""));
    assert!(doc.contains(">Fish &amp; &quot;Chips&quot;</A>"));
}

#[test]
fn test_bookmarks_tags_attribute_only_when_tagged() {
    let mut tagged = item("1", ItemStatus::Unread);
    tagged
        .tags
        .insert("rust".to_string(), Tag::default());
    tagged
        .tags
        .insert("async".to_string(), Tag::default());
    let untagged = item("2", ItemStatus::Unread);
    let result = result(vec![page(vec![tagged], "{}"), page(vec![untagged], "{}")]);

    let (doc, summary) = render_bookmarks(&result);

    assert!(doc.contains("TAGS=\"async,rust\""));
    // Exactly one TAGS attribute in the whole document
    assert_eq!(doc.matches("TAGS=").count(), 1);
    assert_eq!(summary.written, 2);
}

#[test]
fn test_bookmarks_written_to_dated_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = result(vec![page(vec![item("1", ItemStatus::Unread)], "{}")]);

    let (path, summary) = export_bookmarks(&result, dir.path()).unwrap();

    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.ends_with("_bookmarks.html"));
    assert_eq!(summary.written, 1);
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("NETSCAPE-Bookmark-file-1"));
}

// ============================================================================
// Raw archive export
// ============================================================================

#[test]
fn test_raw_archive_one_file_per_page_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let result = result(vec![
        page(vec![item("1", ItemStatus::Unread)], r#"{"list":{"1":{}},"total":2}"#),
        page(vec![item("2", ItemStatus::Unread)], "not even json"),
    ]);

    let paths = export_raw(&result, dir.path()).unwrap();

    assert_eq!(paths.len(), 2);
    assert!(paths[0]
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .ends_with("_pocket_raw_1.json"));
    assert_eq!(
        std::fs::read(&paths[0]).unwrap(),
        result.pages[0].raw.as_bytes()
    );
    assert_eq!(
        std::fs::read(&paths[1]).unwrap(),
        result.pages[1].raw.as_bytes()
    );
}

#[test]
fn test_raw_archive_empty_result_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let paths = export_raw(&result(vec![]), dir.path()).unwrap();
    assert!(paths.is_empty());
}
