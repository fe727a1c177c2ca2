//! Error types for category scanning.
//!
//! Library crates use `thiserror` for explicit error enums; per-file
//! failures inside a scan are logged and skipped instead of surfaced here.

use thiserror::Error;

/// Error types for the category scan.
///
/// Only the root directory listing itself can fail the scan; individual
/// lab files degrade gracefully.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Root path does not exist or is not a directory.
    #[error("Root directory not found: {0}")]
    RootNotFound(String),

    /// Directory traversal failure while listing the root.
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Low-level I/O error from std::io.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
