//! Shared testing utilities for prompt-charter integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SOURCE_ENV: [&str; 5] = [
    "PROMPT_CHARTER_API_URL",
    "PROMPT_CHARTER_RAW_URL",
    "PROMPT_CHARTER_BRANCH",
    "PROMPT_CHARTER_LOCAL_ROOT",
    "PROMPT_CHARTER_LOG",
];

/// Isolated project directory plus a local catalog mirror.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    catalog_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let catalog_dir = root.path().join("catalog");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&catalog_dir).expect("Failed to create test catalog directory");

        Self { root, work_dir, catalog_dir }
    }

    /// Project directory the CLI runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Root of the local catalog mirror.
    pub fn catalog_dir(&self) -> &Path {
        &self.catalog_dir
    }

    /// Build a command for the binary with the source environment cleared.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("prompt-charter").expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir);
        for key in SOURCE_ENV {
            cmd.env_remove(key);
        }
        cmd
    }

    /// Add a catalog file below the mirror root.
    pub fn catalog_file(&self, path: &str, content: &str) {
        let target = self.catalog_dir.join(path);
        fs::create_dir_all(target.parent().expect("catalog file has a parent"))
            .expect("Failed to create catalog directory");
        fs::write(target, content).expect("Failed to write catalog file");
    }

    /// Add `domains/<dir>/RULES.md` with a heading naming the directory.
    pub fn rule_set(&self, dir: &str) {
        self.catalog_file(&format!("domains/{}/RULES.md", dir), &format!("# {}\n", dir));
    }

    /// Location the installer writes to.
    pub fn installed_rules_path(&self) -> PathBuf {
        self.work_dir.join(".prompt-charter").join("RULES.md")
    }

    pub fn installed_rules(&self) -> Option<String> {
        fs::read_to_string(self.installed_rules_path()).ok()
    }

    /// Pretend a previous install already happened.
    pub fn write_existing_rules(&self, content: &str) {
        let path = self.installed_rules_path();
        fs::create_dir_all(path.parent().expect("rules path has a parent"))
            .expect("Failed to create install directory");
        fs::write(path, content).expect("Failed to write existing rules");
    }
}
