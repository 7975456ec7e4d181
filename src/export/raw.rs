//! Raw per-page archive export

use super::date_prefix;
use crate::error::{Error, Result};
use crate::fetch::FetchResult;
use std::path::{Path, PathBuf};
use tracing::info;

/// Persist each page's untouched response body to a dated file
///
/// One file per page, numbered in fetch order, contents byte-for-byte equal
/// to the raw body. Returns the written paths.
pub fn export_raw(result: &FetchResult, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).map_err(|e| {
        Error::export(format!(
            "Failed to create export directory {}: {e}",
            out_dir.display()
        ))
    })?;

    let date = date_prefix();
    let mut paths = Vec::with_capacity(result.pages.len());

    for (index, page) in result.pages.iter().enumerate() {
        let path = out_dir.join(format!("{date}_pocket_raw_{}.json", index + 1));
        std::fs::write(&path, &page.raw)?;
        info!("Exported {}", path.display());
        paths.push(path);
    }

    Ok(paths)
}
