//! labdex-scanner - Category and lab discovery for writeup repositories.
//!
//! This crate provides the read side of labdex:
//! - `frontmatter` - Metadata extraction from markdown documents
//! - `category` - Category folder matching and lab file listing
//!
//! # Architecture
//!
//! ```text
//! labdex-scanner/src/
//! ├── lib.rs              # Main module and exports
//! ├── error.rs            # ScanError
//! ├── frontmatter.rs      # Two-stage front-matter parser
//! └── category/           # Category discovery
//!     ├── mod.rs
//!     ├── scanner.rs      # scan_categories / scan_labs
//!     └── types.rs        # Category, Lab
//! ```
//!
//! # Front-matter support
//!
//! Lab writeups carry metadata in a leading delimited block:
//!
//! ```yaml
//! ---
//! title: "SQLi Basic"
//! lab_id: A03-01
//! date_completed: 2024-01-01
//! tag: sqli
//! ---
//! ```
//!
//! Documents without a block fall back to a bolded-label convention
//! (`**Date Completed**: 2024-01-01`) and a title derived from the first
//! heading or the filename.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod category;
pub mod error;
pub mod frontmatter;

// ============================================================================
// Re-exports
// ============================================================================

pub use category::{
    scanner::{is_category_dir_name, scan_categories, scan_labs},
    types::{Category, Lab},
};
pub use error::ScanError;
pub use frontmatter::{
    Metadata, document_metadata, extract_front_matter, parse_block, resolve_title,
};

// ============================================================================
// Version
// ============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
