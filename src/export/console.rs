//! Console listing export

use crate::error::Result;
use crate::fetch::FetchResult;
use std::io::Write;

/// Write a human-readable listing of every item to `out`
///
/// Deleted items are listed too; the console view is a full inventory.
/// Returns the number of items written.
pub fn export_console(result: &FetchResult, out: &mut impl Write) -> Result<usize> {
    let mut written = 0;

    for page in &result.pages {
        if page.is_empty() {
            writeln!(out, "No items found in this page.")?;
            continue;
        }
        for item in page.items() {
            writeln!(
                out,
                "Item ID: {}, Title: {}, URL: {}",
                item.item_id,
                item.resolved_title.as_deref().unwrap_or_default(),
                item.given_url
            )?;
            written += 1;
        }
    }

    Ok(written)
}
