//! Netscape bookmarks file export
//!
//! Produces the `NETSCAPE-Bookmark-file-1` document browsers import.
//! Deleted items (status 2) are excluded and counted; titles, URLs, and tag
//! lists are HTML-escaped.

use super::{date_prefix, ExportSummary};
use crate::error::{Error, Result};
use crate::fetch::FetchResult;
use crate::types::ItemStatus;
use std::path::{Path, PathBuf};

/// Render the bookmarks document and its written/skipped summary
pub fn render_bookmarks(result: &FetchResult) -> (String, ExportSummary) {
    let mut doc = String::new();
    let mut summary = ExportSummary::default();

    doc.push_str("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n");
    doc.push_str("<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n\n");
    doc.push_str("<TITLE>Bookmarks</TITLE>\n");
    doc.push_str("<H1>Bookmarks</H1>\n");
    doc.push_str("<DL><p>\n");

    for item in result.items() {
        if item.status == ItemStatus::Deleted {
            summary.skipped += 1;
            continue;
        }

        doc.push_str("<DT><A HREF=\"");
        doc.push_str(&escape_html(&item.given_url));
        doc.push_str("\" ADD_DATE=\"");
        doc.push_str(&item.time_added);
        doc.push_str("\" LAST_MODIFIED=\"");
        doc.push_str(&item.time_updated);
        doc.push_str("\" PRIVATE=\"1\" TOREAD=\"0\"");

        let tags = item.tag_list();
        if !tags.is_empty() {
            doc.push_str(" TAGS=\"");
            doc.push_str(&tags.replace('"', "&quot;"));
            doc.push('"');
        }

        doc.push('>');
        doc.push_str(&escape_html(&item.given_title));
        doc.push_str("</A>\n");
        summary.written += 1;
    }

    doc.push_str("</DL><p>\n");
    (doc, summary)
}

/// Write the bookmarks document to a dated file under `out_dir`
///
/// Returns the file path and the written/skipped summary.
pub fn export_bookmarks(result: &FetchResult, out_dir: &Path) -> Result<(PathBuf, ExportSummary)> {
    let (doc, summary) = render_bookmarks(result);

    std::fs::create_dir_all(out_dir).map_err(|e| {
        Error::export(format!(
            "Failed to create export directory {}: {e}",
            out_dir.display()
        ))
    })?;

    let path = out_dir.join(format!("{}_bookmarks.html", date_prefix()));
    std::fs::write(&path, doc)?;

    Ok((path, summary))
}

/// Escape text for embedding in an HTML attribute or element
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
