//! Pure renderers for the generated README documents.
//!
//! Both renderers are functions from aggregated category/lab data to
//! document text. They perform no I/O and are deterministic: the same
//! input always produces byte-identical output.

pub mod category;
pub mod root;

pub use category::render_category;
pub use root::render_root;

use labdex_scanner::Lab;

/// Checklist marker for a lab: checked when a completion date is present.
pub(crate) fn status_icon(lab: &Lab) -> &'static str {
    if lab.is_completed() { "✅" } else { "⬜" }
}
