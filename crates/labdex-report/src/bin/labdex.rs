#![allow(missing_docs)]

//! labdex: regenerate the category and root READMEs of a writeup repository.
//!
//! Argument-less by design: the current working directory is the repository
//! root, and the optional `labdex.yaml` beside it configures the report.
//!
//! Logging: set `RUST_LOG=warn` (or `debug`) to adjust verbosity on stderr.

use anyhow::{Context, Result};

use labdex_report::{ReportConfig, write_reports};
use labdex_scanner::{Category, scan_categories};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = std::env::current_dir().context("Cannot determine working directory")?;
    let config = ReportConfig::load(&root).context("Loading report configuration")?;
    let categories = scan_categories(&root, &config.exclude_dirs)
        .with_context(|| format!("Scanning {}", root.display()))?;

    let written = write_reports(&root, &categories, &config).context("Writing READMEs")?;
    if written.is_some() {
        let done: usize = categories.iter().map(Category::completed).sum();
        let total: usize = categories.iter().map(|c| config.total_for(c)).sum();
        log::info!(
            "Updated {} category READMEs ({done} / {total} labs completed)",
            categories.len()
        );
    }
    Ok(())
}
