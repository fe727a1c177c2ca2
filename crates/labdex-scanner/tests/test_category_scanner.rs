//! Integration tests for category scanning - tests folder matching,
//! lab listing, and graceful degradation on bad input.

use std::fs;

use labdex_scanner::{ScanError, scan_categories, scan_labs};
use tempfile::TempDir;

/// Only numeric-prefixed folders are picked up, sorted by name.
#[test]
fn test_scan_matches_convention_and_sorts() {
    let temp_dir = TempDir::new().unwrap();
    for dir in [
        "02_Crypto_Failures",
        "01-Injection",
        "notes",
        ".hidden",
        "3-BadPrefix",
    ] {
        fs::create_dir(temp_dir.path().join(dir)).unwrap();
    }

    let categories = scan_categories(temp_dir.path(), &[]).unwrap();

    let names: Vec<&str> = categories.iter().map(|c| c.dir_name.as_str()).collect();
    assert_eq!(names, ["01-Injection", "02_Crypto_Failures"]);
}

/// Names listed in the exclusion list are skipped even when they match.
#[test]
fn test_scan_respects_exclusions() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("01-Injection")).unwrap();
    fs::create_dir(temp_dir.path().join("99-Archive")).unwrap();

    let exclude = vec!["99-Archive".to_string()];
    let categories = scan_categories(temp_dir.path(), &exclude).unwrap();

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].dir_name, "01-Injection");
}

/// A missing root is a hard error, not an empty result.
#[test]
fn test_scan_missing_root_errors() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let err = scan_categories(&missing, &[]).unwrap_err();
    assert!(matches!(err, ScanError::RootNotFound(_)));
}

/// Lab listing excludes README.md case-insensitively and non-markdown files.
#[test]
fn test_scan_labs_filters_and_sorts() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("01-Injection");
    fs::create_dir(&dir).unwrap();

    fs::write(dir.join("b-second.md"), "# Second\n").unwrap();
    fs::write(dir.join("a-first.md"), "# First\n").unwrap();
    fs::write(dir.join("README.md"), "generated\n").unwrap();
    fs::write(dir.join("readme.MD"), "generated\n").unwrap();
    fs::write(dir.join("notes.txt"), "not markdown\n").unwrap();

    let labs = scan_labs(&dir);

    let files: Vec<&str> = labs.iter().map(|l| l.filename.as_str()).collect();
    assert_eq!(files, ["a-first.md", "b-second.md"]);
    assert_eq!(labs[0].title, "First");
}

/// Front-matter fields flow into the lab entries; files without metadata
/// still get a title from the fallback chain.
#[test]
fn test_scan_labs_metadata_and_fallbacks() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("03-Injection");
    fs::create_dir(&dir).unwrap();

    fs::write(
        dir.join("sqli-basic.md"),
        "---\ntitle: \"SQLi Basic\"\nlab_id: A03-01\ndate_completed: 2024-01-01\ntag: sqli\n---\n\n# SQLi Basic\n",
    )
    .unwrap();
    fs::write(dir.join("xss-stored-lab.md"), "Just prose, no metadata at all.\n").unwrap();

    let labs = scan_labs(&dir);
    assert_eq!(labs.len(), 2);

    assert_eq!(labs[0].title, "SQLi Basic");
    assert_eq!(labs[0].lab_id.as_deref(), Some("A03-01"));
    assert!(labs[0].is_completed());

    // Fallback title from the filename stem.
    assert_eq!(labs[1].title, "Xss Stored Lab");
    assert!(!labs[1].is_completed());
}

/// A file that is not valid UTF-8 is skipped without failing the scan.
#[test]
fn test_scan_labs_skips_unreadable_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("04-Insecure-Design");
    fs::create_dir(&dir).unwrap();

    fs::write(dir.join("broken.md"), [0xff, 0xfe, 0x00, 0xde]).unwrap();
    fs::write(dir.join("good.md"), "# Good Lab\n").unwrap();

    let labs = scan_labs(&dir);
    assert_eq!(labs.len(), 1);
    assert_eq!(labs[0].filename, "good.md");
}

/// An empty category folder yields zero labs, not an error.
#[test]
fn test_scan_empty_category() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("05-Misconfiguration")).unwrap();

    let categories = scan_categories(temp_dir.path(), &[]).unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].total(), 0);
    assert_eq!(categories[0].completed(), 0);
}
