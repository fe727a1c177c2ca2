//! Category discovery: folder convention matching and lab file listing.

pub mod scanner;
pub mod types;

pub use scanner::{is_category_dir_name, scan_categories, scan_labs};
pub use types::{Category, Lab};
