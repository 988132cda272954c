use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

use crate::domain::{AppError, catalog};
use crate::ports::ProjectStore;

/// In-memory project store.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct MemoryProjectStore {
    pub content: RefCell<Option<String>>,
    pub writes: RefCell<usize>,
}

#[allow(dead_code)]
impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(content: &str) -> Self {
        Self { content: RefCell::new(Some(content.to_string())), writes: RefCell::new(0) }
    }

    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl ProjectStore for MemoryProjectStore {
    fn rules_path(&self) -> PathBuf {
        PathBuf::from(catalog::INSTALL_DIR).join(catalog::RULES_FILE)
    }

    fn rules_exist(&self) -> bool {
        self.content.borrow().is_some()
    }

    fn write_rules(&self, content: &str) -> Result<PathBuf, AppError> {
        *self.content.borrow_mut() = Some(content.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(self.rules_path())
    }

    fn create_rules(&self, content: &str) -> Result<PathBuf, AppError> {
        if self.rules_exist() {
            let err = io::Error::new(io::ErrorKind::AlreadyExists, "rules already installed");
            return Err(err.into());
        }
        self.write_rules(content)
    }
}
