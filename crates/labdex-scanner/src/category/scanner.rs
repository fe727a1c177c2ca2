//! Category folder and lab file discovery.
//!
//! Scans the immediate subdirectories of a root path for folders matching
//! the `NN-Name` / `NN_Name` convention and lists the markdown writeups
//! inside each. The root path is always passed explicitly; there is no
//! global state.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::category::types::{Category, Lab};
use crate::error::ScanError;
use crate::frontmatter::{document_metadata, resolve_title};

/// Returns `true` when a folder name follows the category convention:
/// two ASCII digits, a `-` or `_` separator, then a non-empty remainder.
#[must_use]
pub fn is_category_dir_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() > 3
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && (bytes[2] == b'-' || bytes[2] == b'_')
}

/// Scan `root` for category folders, reading the labs inside each.
///
/// Immediate subdirectories only; hidden directories and names listed in
/// `exclude` are skipped. Categories are returned sorted by folder name.
///
/// # Errors
///
/// Returns [`ScanError::RootNotFound`] when `root` is not a directory, or
/// a traversal error when the root listing itself fails. Unreadable lab
/// files inside a category are logged and skipped, never fatal.
pub fn scan_categories(root: &Path, exclude: &[String]) -> Result<Vec<Category>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.display().to_string()));
    }

    let mut categories = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.')
            || !is_category_dir_name(&name)
            || exclude.iter().any(|excluded| excluded == name.as_ref())
        {
            continue;
        }
        let mut category = Category::new(name.into_owned());
        category.labs = scan_labs(entry.path());
        categories.push(category);
    }

    log::info!(
        "Found {} category folders under {}",
        categories.len(),
        root.display()
    );
    Ok(categories)
}

/// List and parse the lab markdown files directly inside a category folder.
///
/// Files are matched by a case-insensitive `.md` extension, README files
/// are excluded (case-insensitive), and the result is sorted by filename.
/// A file that cannot be read is logged with its path and skipped.
#[must_use]
pub fn scan_labs(category_dir: &Path) -> Vec<Lab> {
    let mut labs = Vec::new();
    let walker = WalkDir::new(category_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();
    for entry in walker.into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !is_markdown(path) || is_readme(path) {
            continue;
        }
        match fs::read_to_string(path) {
            Ok(content) => labs.push(read_lab(path, &content)),
            Err(err) => {
                log::warn!("Skipping unreadable lab file {}: {err}", path.display());
            }
        }
    }
    labs
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

fn is_readme(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case("readme.md"))
}

fn read_lab(path: &Path, content: &str) -> Lab {
    let metadata = document_metadata(content);
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let field = |key: &str| metadata.get(key).filter(|value| !value.is_empty()).cloned();
    Lab {
        title: resolve_title(&metadata, content, &stem),
        lab_id: field("lab_id"),
        date_completed: field("date_completed"),
        tag: field("tag"),
        filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_dir_name_convention() {
        assert!(is_category_dir_name("01-Injection"));
        assert!(is_category_dir_name("10_Server-Side-Request-Forgery"));
        assert!(!is_category_dir_name("1-Injection"));
        assert!(!is_category_dir_name("01"));
        assert!(!is_category_dir_name("01-"));
        assert!(!is_category_dir_name("tools"));
        assert!(!is_category_dir_name("Injection-01"));
    }

    #[test]
    fn test_read_lab_field_mapping() {
        let content = "---\ntitle: SQLi Basic\nlab_id: A03-01\ndate_completed: 2024-01-01\ntag: sqli\n---\nbody\n";
        let lab = read_lab(Path::new("01-Injection/sqli-basic.md"), content);
        assert_eq!(lab.filename, "sqli-basic.md");
        assert_eq!(lab.title, "SQLi Basic");
        assert_eq!(lab.lab_id.as_deref(), Some("A03-01"));
        assert_eq!(lab.date_completed.as_deref(), Some("2024-01-01"));
        assert_eq!(lab.tag.as_deref(), Some("sqli"));
        assert!(lab.is_completed());
    }

    #[test]
    fn test_read_lab_empty_fields_become_none() {
        let content = "---\ntitle: X\nlab_id: \"\"\ndate_completed:\n---\n";
        let lab = read_lab(Path::new("x.md"), content);
        assert_eq!(lab.lab_id, None);
        assert_eq!(lab.date_completed, None);
        assert!(!lab.is_completed());
    }
}
