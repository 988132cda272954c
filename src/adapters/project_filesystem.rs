use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::{Builder, NamedTempFile};

use crate::domain::{AppError, catalog};
use crate::ports::ProjectStore;

/// Mode of a freshly installed rules file, before the umask.
#[cfg(unix)]
const RULES_MODE: u32 = 0o644;

/// Project store writing `.prompt-charter/RULES.md` below a project root.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a project store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn install_dir(&self) -> PathBuf {
        self.root.join(catalog::INSTALL_DIR)
    }

    /// Write `content` to a temporary file inside the install directory.
    fn stage(&self, content: &str) -> Result<NamedTempFile, AppError> {
        let dir = self.install_dir();
        fs::create_dir_all(&dir)?;

        let mut builder = Builder::new();
        builder.prefix(".RULES.md");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(RULES_MODE));
        }

        // Staged file must share a filesystem with the target for the rename.
        let mut staged = builder.tempfile_in(&dir)?;
        staged.write_all(content.as_bytes())?;
        staged.flush()?;
        Ok(staged)
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn rules_path(&self) -> PathBuf {
        self.install_dir().join(catalog::RULES_FILE)
    }

    fn rules_exist(&self) -> bool {
        self.rules_path().exists()
    }

    fn write_rules(&self, content: &str) -> Result<PathBuf, AppError> {
        let staged = self.stage(content)?;
        let target = self.rules_path();
        if let Ok(existing) = fs::metadata(&target) {
            staged.as_file().set_permissions(existing.permissions())?;
        }

        staged.persist(&target).map_err(|e| AppError::Io(e.error))?;
        Ok(target)
    }

    fn create_rules(&self, content: &str) -> Result<PathBuf, AppError> {
        let staged = self.stage(content)?;
        let target = self.rules_path();

        staged.persist_noclobber(&target).map_err(|e| AppError::Io(e.error))?;
        Ok(target)
    }
}
