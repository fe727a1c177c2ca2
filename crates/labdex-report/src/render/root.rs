//! Root README rendering: header and badges, aggregate progress, mermaid
//! chart, category index, flattened lab table, and static footer sections.

use labdex_scanner::Category;

use crate::config::ReportConfig;
use crate::render::status_icon;

/// Cycling markers for the category index lines.
const CATEGORY_MARKERS: [&str; 10] = ["🟢", "🔵", "🟠", "🟣", "🟡", "🔴", "🟤", "⚪", "⚫", "🟧"];

const FOOTER: &str = "## 🤝 How to Contribute\n\n\
- Follow the filename and folder conventions: `NN-CategoryName/Lab-Name-ID.md`\n\
- Include front-matter at the top of each lab (see templates).\n\
- Submit a PR 🚀\n\n\
## ⚠️ Disclaimer\n\n\
> This repository is for **educational purposes only**.\n\
> Do not attempt these techniques on systems you don't own or have explicit permission to test.\n";

/// Render the root README document from all scanned categories.
#[must_use]
pub fn render_root(categories: &[Category], config: &ReportConfig) -> String {
    let total: usize = categories.iter().map(|c| config.total_for(c)).sum();
    let done: usize = categories.iter().map(Category::completed).sum();

    let mut doc = String::new();
    doc.push_str(&format!("# {}\n\n", config.title));
    doc.push_str(&format!("{}\n\n", config.subtitle));
    if let Some(repo) = &config.repo {
        doc.push_str(&format!(
            "![GitHub repo size](https://img.shields.io/github/repo-size/{repo}?color=green)\n"
        ));
        doc.push_str(&format!(
            "![GitHub last commit](https://img.shields.io/github/last-commit/{repo})\n"
        ));
        doc.push_str("![License](https://img.shields.io/badge/License-MIT-brightgreen)\n\n");
    }

    doc.push_str(&format!(
        "**Overall progress:** {done} / {total} labs completed.\n\n"
    ));
    doc.push_str("```mermaid\npie showData\n  title Lab Progress\n");
    doc.push_str(&format!("  \"Completed Labs\" : {done}\n"));
    // Clamp so an override below the completed count never renders a
    // negative slice.
    doc.push_str(&format!(
        "  \"Pending Labs\" : {}\n",
        total.saturating_sub(done)
    ));
    doc.push_str("```\n\n");

    doc.push_str("## 📂 Categories\n\n");
    for (index, category) in categories.iter().enumerate() {
        let marker = CATEGORY_MARKERS[index % CATEGORY_MARKERS.len()];
        doc.push_str(&format!(
            "- {marker} **{}** — {} / {} completed — [View]({}/README.md)\n",
            category.display_name(),
            category.completed(),
            config.total_for(category),
            category.dir_name
        ));
    }
    doc.push('\n');

    doc.push_str("## 🧪 Labs\n\n");
    doc.push_str("| Status | Lab | Category | Tags |\n");
    doc.push_str("|--------|-----|----------|------|\n");
    for category in categories {
        for lab in &category.labs {
            doc.push_str(&format!(
                "| {} | [{}]({}/{}) | {} | `{}` |\n",
                status_icon(lab),
                lab.title,
                category.dir_name,
                lab.filename,
                category.display_name(),
                lab.tag.as_deref().unwrap_or("-")
            ));
        }
    }
    doc.push('\n');

    doc.push_str(FOOTER);
    doc
}
