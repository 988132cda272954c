use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{AppError, Entry};
use crate::ports::TreeProvider;

/// In-memory catalog tree with optional flaky directories.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct InMemoryTree {
    dirs: HashMap<String, Vec<Entry>>,
    files: HashMap<String, String>,
    /// Remaining successful listings before a path starts failing.
    fail_after: HashMap<String, usize>,
    listings: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl InMemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tree holding the given files, each with content `# <path>`.
    pub fn from_files(paths: &[&str]) -> Self {
        paths.iter().fold(Self::new(), |tree, path| tree.with_file(path, &format!("# {}", path)))
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        let (parent, name) = split_parent(path);
        self.with_dir_mut(parent);
        self.push_child(parent, Entry::file(name, path));
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        self.with_dir_mut(path);
        self
    }

    /// Make listings of `path` fail after `successes` successful calls.
    pub fn fail_after(mut self, path: &str, successes: usize) -> Self {
        self.fail_after.insert(path.to_string(), successes);
        self
    }

    pub fn fail_at(self, path: &str) -> Self {
        self.fail_after(path, 0)
    }

    /// How many times `path` has been listed.
    pub fn listing_count(&self, path: &str) -> usize {
        self.listings.borrow().get(path).copied().unwrap_or(0)
    }

    /// Every directory path known to the tree, including the root `""`.
    pub fn dir_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.dirs.keys().cloned().collect();
        paths.sort();
        paths
    }

    fn with_dir_mut(&mut self, path: &str) {
        if path.is_empty() || self.dirs.contains_key(path) {
            self.dirs.entry(String::new()).or_default();
            return;
        }
        self.dirs.insert(path.to_string(), Vec::new());
        let (parent, name) = split_parent(path);
        self.with_dir_mut(parent);
        self.push_child(parent, Entry::directory(name, path));
    }

    fn push_child(&mut self, parent: &str, entry: Entry) {
        let children = self.dirs.entry(parent.to_string()).or_default();
        if !children.iter().any(|c| c.name == entry.name) {
            children.push(entry);
        }
    }
}

impl TreeProvider for InMemoryTree {
    fn list_children(&self, path: &str) -> Result<Vec<Entry>, AppError> {
        let path = path.trim_end_matches('/');
        let count = {
            let mut listings = self.listings.borrow_mut();
            let count = listings.entry(path.to_string()).or_insert(0);
            *count += 1;
            *count
        };
        if let Some(successes) = self.fail_after.get(path) {
            if count > *successes {
                return Err(AppError::fetch(path, "simulated listing failure"));
            }
        }
        Ok(self.dirs.get(path).cloned().unwrap_or_default())
    }

    fn fetch_file(&self, path: &str) -> Result<String, AppError> {
        self.files.get(path).cloned().ok_or_else(|| AppError::fetch(path, "file not found"))
    }
}

fn split_parent(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((parent, name)) => (parent, name),
        None => ("", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    #[test]
    fn builds_parent_directories() {
        let tree = InMemoryTree::from_files(&["domains/web/RULES.md"]);
        assert_eq!(
            tree.list_children("domains").unwrap(),
            vec![Entry::directory("web", catalog::domain_path("web"))]
        );
        assert_eq!(
            tree.list_children("").unwrap(),
            vec![Entry::directory(catalog::DOMAINS_DIR, catalog::DOMAINS_DIR)]
        );
    }
}
