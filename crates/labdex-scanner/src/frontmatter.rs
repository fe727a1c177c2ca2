//! Front-matter metadata extraction for lab writeups.
//!
//! Two-stage parser: delimited-block detection first, then line-oriented
//! `key: value` tokenization of the block body. Documents without a block
//! fall back to a bolded-label convention (`**Label**: value`) scanned over
//! the leading lines.
//!
//! The extractor never fails: malformed lines are skipped and a document
//! with no usable metadata yields an empty map.

use std::collections::BTreeMap;

/// Number of leading lines scanned for `**Label**: value` pairs.
pub const BOLD_SCAN_LINES: usize = 24;

/// Number of leading lines scanned for a top-level heading.
pub const HEADING_SCAN_LINES: usize = 20;

/// Parsed metadata: lowercased keys mapped to quote-stripped values.
pub type Metadata = BTreeMap<String, String>;

/// Extract the delimited front-matter block from markdown content.
///
/// The block must open on the document's first line (an optional UTF-8 BOM
/// is tolerated): a `---` marker line, the body, then a closing `---`
/// marker line. Returns the raw body text, or `None` when the document does
/// not begin with a complete block.
#[must_use]
pub fn extract_front_matter(content: &str) -> Option<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if !is_marker_line(first) {
        return None;
    }

    let body_start = first.len();
    let mut offset = body_start;
    for line in lines {
        if is_marker_line(line) {
            return Some(&content[body_start..offset]);
        }
        offset += line.len();
    }
    // Opening marker without a closing one: not a block.
    None
}

/// Tokenize a front-matter block body into a [`Metadata`] map.
///
/// Each line is split at the first `:`; keys are restricted to ASCII
/// alphanumerics, `_` and `-`, and are case-folded to lowercase. Values
/// are trimmed and stripped of one pair of surrounding matching quotes.
/// Lines that do not tokenize are skipped.
#[must_use]
pub fn parse_block(block: &str) -> Metadata {
    let mut data = Metadata::new();
    for line in block.lines() {
        if let Some((key, value)) = tokenize_line(line) {
            data.insert(key, value);
        }
    }
    data
}

/// Scan the first [`BOLD_SCAN_LINES`] lines for `**Label**: value` pairs.
///
/// Labels are case-folded and whitespace is collapsed to `_`, so
/// `**Date Completed**: 2024-01-01` yields the `date_completed` key.
#[must_use]
pub fn parse_bold_labels(content: &str) -> Metadata {
    let mut data = Metadata::new();
    for line in content.lines().take(BOLD_SCAN_LINES) {
        let Some(rest) = line.trim_start().strip_prefix("**") else {
            continue;
        };
        let Some((label, after)) = rest.split_once("**") else {
            continue;
        };
        let Some(value) = after.trim_start().strip_prefix(':') else {
            continue;
        };
        let Some(key) = fold_label(label) else {
            continue;
        };
        data.insert(key, strip_quotes(value.trim()).to_string());
    }
    data
}

/// Extract metadata from a document: delimited block when present, the
/// bolded-label fallback otherwise.
#[must_use]
pub fn document_metadata(content: &str) -> Metadata {
    match extract_front_matter(content) {
        Some(block) => parse_block(block),
        None => parse_bold_labels(content),
    }
}

/// Resolve a document title through the fallback chain: explicit `title`
/// metadata, first top-level heading within [`HEADING_SCAN_LINES`] lines,
/// then a title-cased form of the filename stem.
#[must_use]
pub fn resolve_title(metadata: &Metadata, content: &str, file_stem: &str) -> String {
    if let Some(title) = metadata.get("title") {
        if !title.is_empty() {
            return title.clone();
        }
    }
    if let Some(heading) = first_heading(content) {
        return heading;
    }
    title_case_stem(file_stem)
}

fn is_marker_line(line: &str) -> bool {
    line.trim_end() == "---"
}

fn tokenize_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() || !key.chars().all(is_key_char) {
        return None;
    }
    Some((
        key.to_ascii_lowercase(),
        strip_quotes(value.trim()).to_string(),
    ))
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn fold_label(label: &str) -> Option<String> {
    let label = label.trim();
    if label.is_empty() || !label.chars().all(|c| is_key_char(c) || c == ' ') {
        return None;
    }
    Some(
        label
            .to_ascii_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_"),
    )
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn first_heading(content: &str) -> Option<String> {
    content
        .lines()
        .take(HEADING_SCAN_LINES)
        .find_map(|line| line.strip_prefix("# "))
        .map(|heading| heading.trim().to_string())
        .filter(|heading| !heading.is_empty())
}

fn title_case_stem(stem: &str) -> String {
    stem.replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
