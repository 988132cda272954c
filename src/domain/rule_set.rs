use serde::Serialize;

use super::catalog;

/// A rule set found by full-tree enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSetDescriptor {
    /// Top-level directory name under the catalog root.
    pub domain: String,
    /// Containing directory with the catalog root prefix stripped.
    pub path: String,
    /// Path of the rules file itself, relative to the catalog repository root.
    pub full_path: String,
}

impl RuleSetDescriptor {
    /// Build a descriptor for the rules file directly inside `directory`.
    pub fn for_directory(domain: &str, directory: &str) -> Self {
        Self {
            domain: domain.to_string(),
            path: catalog::strip_root(catalog::DOMAINS_DIR, directory).to_string(),
            full_path: catalog::rules_file_path(directory),
        }
    }

    /// Location below the domain directory, `.` for a rule set at the domain root.
    pub fn subpath(&self) -> &str {
        match self.path.strip_prefix(self.domain.as_str()) {
            Some("") => catalog::CURRENT_DIR_OPTION,
            Some(rest) => rest.strip_prefix('/').unwrap_or(&self.path),
            None => &self.path,
        }
    }
}

/// One choice offered while descending towards a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOption {
    pub name: String,
    /// Whether this option's directory itself holds the rules file.
    pub has_direct_file: bool,
}

impl LevelOption {
    pub fn new(name: impl Into<String>, has_direct_file: bool) -> Self {
        Self { name: name.into(), has_direct_file }
    }

    /// The synthetic "use this directory" option.
    pub fn current_dir() -> Self {
        Self::new(catalog::CURRENT_DIR_OPTION, true)
    }
}

/// Outcome of a successful interactive descent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRuleSet {
    /// Directory that directly holds the rules file.
    pub directory: String,
    /// Path of the rules file to fetch.
    pub file_path: String,
}

impl ResolvedRuleSet {
    pub fn at(directory: impl Into<String>) -> Self {
        let directory = directory.into();
        let file_path = catalog::rules_file_path(&directory);
        Self { directory, file_path }
    }
}
