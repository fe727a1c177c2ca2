//! labdex-report - README rendering and writing for writeup repositories.
//!
//! This crate is the write side of labdex:
//! - `config` - Optional `labdex.yaml` report configuration
//! - `render` - Pure renderers for the category and root documents
//! - `write` - Full-overwrite README writing
//!
//! Rendering is deterministic: identical input data always produces
//! byte-identical documents.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod render;
pub mod write;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{CONFIG_FILE, ConfigError, ReportConfig};
pub use render::{render_category, render_root};
pub use write::write_reports;

// ============================================================================
// Version
// ============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
