//! README writing: full overwrite of the category and root documents.

use std::fs;
use std::path::{Path, PathBuf};

use labdex_scanner::Category;

use crate::config::ReportConfig;
use crate::render::{render_category, render_root};

/// Write one README per category folder plus the root README.
///
/// Every document is fully overwritten, UTF-8 encoded; no incremental
/// merge and no preservation of manual edits. When `categories` is empty
/// the root README is left untouched and `None` is returned.
///
/// # Errors
///
/// Returns the underlying I/O error when a document cannot be written.
pub fn write_reports(
    root: &Path,
    categories: &[Category],
    config: &ReportConfig,
) -> std::io::Result<Option<PathBuf>> {
    if categories.is_empty() {
        log::warn!(
            "No category folders found under {}; root README not written",
            root.display()
        );
        return Ok(None);
    }

    for category in categories {
        let path = root.join(&category.dir_name).join("README.md");
        fs::write(&path, render_category(category, config))?;
        log::info!("Wrote category README: {}", path.display());
    }

    let root_readme = root.join("README.md");
    fs::write(&root_readme, render_root(categories, config))?;
    log::info!("Wrote root README: {}", root_readme.display());
    Ok(Some(root_readme))
}
