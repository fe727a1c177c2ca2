//! Category and lab data types.
//!
//! Both types are derived transiently from the filesystem on each run;
//! nothing persists across runs except the rendered README files.

use serde::{Deserialize, Serialize};

/// One markdown lab writeup discovered inside a category folder.
///
/// Lab identity is the filename within its category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lab {
    /// File name within the category folder.
    pub filename: String,
    /// Resolved title (front matter, first heading, or filename).
    pub title: String,
    /// Optional lab identifier from front matter.
    #[serde(default)]
    pub lab_id: Option<String>,
    /// Optional completion date, kept as an opaque string and never parsed.
    #[serde(default)]
    pub date_completed: Option<String>,
    /// Optional freeform tag.
    #[serde(default)]
    pub tag: Option<String>,
}

impl Lab {
    /// Creates a new `Lab` with required fields.
    #[must_use]
    pub fn new(filename: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns `true` when a non-empty completion date is recorded.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.date_completed
            .as_deref()
            .is_some_and(|date| !date.trim().is_empty())
    }
}

/// A category folder and the labs discovered inside it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Folder name as found on disk (e.g. `01-Injection`).
    pub dir_name: String,
    /// Labs in filename order.
    #[serde(default)]
    pub labs: Vec<Lab>,
}

impl Category {
    /// Creates an empty `Category` for the given folder name.
    #[must_use]
    pub fn new(dir_name: impl Into<String>) -> Self {
        Self {
            dir_name: dir_name.into(),
            labs: Vec::new(),
        }
    }

    /// Display name: separators replaced with spaces, numeric prefix kept.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.dir_name.replace(['-', '_'], " ")
    }

    /// Number of labs with a completion date.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.labs.iter().filter(|lab| lab.is_completed()).count()
    }

    /// Total number of labs discovered on disk.
    #[must_use]
    pub fn total(&self) -> usize {
        self.labs.len()
    }
}
