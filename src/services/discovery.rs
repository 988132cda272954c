//! Rule-set discovery over a catalog tree.
//!
//! The listing that anchors an operation propagates its error. Listings made
//! while recursing below it treat a failing directory as empty.

use tracing::{debug, warn};

use crate::domain::{AppError, Entry, LevelOption, RuleSetDescriptor, catalog};
use crate::ports::TreeProvider;

/// Discovery queries over a [`TreeProvider`].
#[derive(Debug, Clone)]
pub struct DiscoveryEngine<T: TreeProvider> {
    provider: T,
}

impl<T: TreeProvider> DiscoveryEngine<T> {
    pub fn new(provider: T) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &T {
        &self.provider
    }

    /// Whether `path` directly contains the rules file.
    pub fn has_direct_file(&self, path: &str) -> Result<bool, AppError> {
        Ok(contains_rules_file(&self.provider.list_children(path)?))
    }

    /// Whether `path` or any directory below it directly contains the rules file.
    ///
    /// Never fails: unreadable directories count as holding nothing.
    pub fn subtree_has_terminal_file(&self, path: &str) -> bool {
        let entries = self.list_or_empty(path);
        if contains_rules_file(&entries) {
            return true;
        }
        entries
            .iter()
            .filter(|entry| entry.is_dir())
            .any(|dir| self.subtree_has_terminal_file(&dir.path))
    }

    /// Domains under the catalog root with at least one rule set somewhere below them.
    pub fn available_domains(&self) -> Result<Vec<String>, AppError> {
        let entries = self.provider.list_children(catalog::DOMAINS_DIR)?;
        let domains: Vec<String> = entries
            .into_iter()
            .filter(|entry| entry.is_dir() && self.subtree_has_terminal_file(&entry.path))
            .map(|entry| entry.name)
            .collect();
        debug!(count = domains.len(), "discovered domains");
        Ok(domains)
    }

    /// Choices for the next descent step below `path`.
    ///
    /// A directory holding the rules file itself yields only the synthetic `.`
    /// option. Otherwise every child directory with a rule set somewhere below
    /// it is offered, tagged with whether that child holds the file directly.
    pub fn list_first_level_options(&self, path: &str) -> Result<Vec<LevelOption>, AppError> {
        let entries = self.provider.list_children(path)?;
        if contains_rules_file(&entries) {
            return Ok(vec![LevelOption::current_dir()]);
        }

        let options = entries
            .iter()
            .filter(|entry| entry.is_dir() && self.subtree_has_terminal_file(&entry.path))
            .map(|dir| {
                let has_direct_file = contains_rules_file(&self.list_or_empty(&dir.path));
                LevelOption::new(dir.name.as_str(), has_direct_file)
            })
            .collect();
        Ok(options)
    }

    /// Every rule set below `base_path`, labelled with `domain`.
    ///
    /// Descent stops at the first directory on each branch that holds the rules
    /// file, so nested rule sets below a hit are not reported. Output follows
    /// listing order.
    pub fn enumerate_all(
        &self,
        domain: &str,
        base_path: &str,
    ) -> Result<Vec<RuleSetDescriptor>, AppError> {
        let entries = self.provider.list_children(base_path)?;
        let mut found = Vec::new();
        self.collect_rule_sets(domain, base_path, &entries, &mut found);
        Ok(found)
    }

    /// Every rule set across all available domains, in domain order.
    pub fn discover_all_rule_sets(&self) -> Result<Vec<RuleSetDescriptor>, AppError> {
        let mut rule_sets = Vec::new();
        for domain in self.available_domains()? {
            rule_sets.extend(self.enumerate_all(&domain, &catalog::domain_path(&domain))?);
        }
        Ok(rule_sets)
    }

    fn collect_rule_sets(
        &self,
        domain: &str,
        directory: &str,
        entries: &[Entry],
        found: &mut Vec<RuleSetDescriptor>,
    ) {
        if contains_rules_file(entries) {
            found.push(RuleSetDescriptor::for_directory(domain, directory));
            return;
        }

        for dir in entries.iter().filter(|entry| entry.is_dir()) {
            let nested = self.list_or_empty(&dir.path);
            self.collect_rule_sets(domain, &dir.path, &nested, found);
        }
    }

    fn list_or_empty(&self, path: &str) -> Vec<Entry> {
        self.provider.list_children(path).unwrap_or_else(|err| {
            warn!(path, error = %err, "treating unreadable directory as empty");
            Vec::new()
        })
    }
}

fn contains_rules_file(entries: &[Entry]) -> bool {
    entries.iter().any(|entry| entry.is_file_named(catalog::RULES_FILE))
}
