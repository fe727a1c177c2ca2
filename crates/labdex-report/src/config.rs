//! Report configuration loaded from an optional `labdex.yaml`.
//!
//! The configuration carries the root README header strings, the optional
//! repository slug for badge rendering, explicit per-category total
//! overrides, and extra folder names excluded from the scan. A missing
//! file yields the defaults; a present but malformed file is an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use labdex_scanner::Category;

/// File name of the optional report configuration, resolved under the root.
pub const CONFIG_FILE: &str = "labdex.yaml";

/// Error types for configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file exists but could not be read.
    #[error("Cannot read {0}: {1}")]
    Read(String, #[source] std::io::Error),

    /// Configuration file is not valid YAML for the expected shape.
    #[error("Malformed {0}: {1}")]
    Parse(String, #[source] serde_yaml::Error),
}

/// Report configuration.
///
/// ```yaml
/// title: "🔐 OWASP Top 10 — Hands-on Lab Writeups"
/// repo: "example/owasp-top10-labs"
/// total_overrides:
///   01-Injection: 12
/// exclude_dirs:
///   - "99-Tools"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "snake_case")]
pub struct ReportConfig {
    /// Root README title line.
    pub title: String,
    /// Root README subtitle line, rendered under the title.
    pub subtitle: String,
    /// Optional `owner/name` repository slug; enables shields.io badges.
    pub repo: Option<String>,
    /// Category folder name mapped to a fixed lab total. Categories with
    /// no entry use the computed count.
    pub total_overrides: BTreeMap<String, usize>,
    /// Extra directory names excluded from the category scan.
    pub exclude_dirs: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "🔐 Hands-on Lab Writeups".to_string(),
            subtitle: "_A curated collection of lab writeups, notes, and exploits._".to_string(),
            repo: None,
            total_overrides: BTreeMap::new(),
            exclude_dirs: Vec::new(),
        }
    }
}

impl ReportConfig {
    /// Load the configuration from `<root>/labdex.yaml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when an existing file cannot be read
    /// and [`ConfigError::Parse`] when it does not deserialize. A missing
    /// file is not an error.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)
            .map_err(|err| ConfigError::Read(path.display().to_string(), err))?;
        serde_yaml::from_str(&raw)
            .map_err(|err| ConfigError::Parse(path.display().to_string(), err))
    }

    /// Effective lab total for a category, honoring any configured override.
    #[must_use]
    pub fn total_for(&self, category: &Category) -> usize {
        self.total_overrides
            .get(&category.dir_name)
            .copied()
            .unwrap_or_else(|| category.total())
    }
}
