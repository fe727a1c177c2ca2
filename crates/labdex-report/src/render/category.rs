//! Per-category README rendering.

use labdex_scanner::Category;

use crate::config::ReportConfig;
use crate::render::status_icon;

/// Render the README document for one category folder.
///
/// Heading, completed/total counts (total honoring any configured
/// override), one checklist line per lab with optional id and tag
/// annotations, and a static cheatsheet placeholder section.
#[must_use]
pub fn render_category(category: &Category, config: &ReportConfig) -> String {
    let display = category.display_name();
    let mut doc = String::new();

    doc.push_str(&format!("# {display}\n\n"));
    doc.push_str(&format!(
        "This folder contains lab writeups for the **{display}** category.\n\n"
    ));
    doc.push_str("### Progress\n\n");
    doc.push_str(&format!(
        "- Completed: **{}** / **{}**\n\n",
        category.completed(),
        config.total_for(category)
    ));

    doc.push_str("### Labs\n");
    for lab in &category.labs {
        doc.push_str(&format!(
            "\n- {} [{}]({})",
            status_icon(lab),
            lab.title,
            lab.filename
        ));
        if let Some(lab_id) = &lab.lab_id {
            doc.push_str(&format!(" — `{lab_id}`"));
        }
        if let Some(tag) = &lab.tag {
            doc.push_str(&format!(" — _{tag}_"));
        }
    }

    doc.push_str("\n\n### Cheatsheet / Quick Notes\n\n");
    doc.push_str("- (Add category-specific payloads / detection tips here)\n");
    doc
}
