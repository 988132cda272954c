use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{AppError, Entry, EntryKind, LocalSourceConfig, catalog};
use crate::ports::TreeProvider;

/// Catalog tree mirrored on the local filesystem.
///
/// Paths resolve below a fixed root. Paths that would leave the root are
/// treated as absent.
#[derive(Debug, Clone)]
pub struct FilesystemTreeProvider {
    root: PathBuf,
}

impl FilesystemTreeProvider {
    pub fn new(config: LocalSourceConfig) -> Self {
        Self { root: config.root }
    }

    /// Map a catalog path onto the host filesystem.
    ///
    /// Returns the host path and the normalized catalog path, or `None` when a
    /// segment is `..`, absolute, or otherwise not a plain name.
    fn resolve(&self, path: &str) -> Option<(PathBuf, String)> {
        let mut host = self.root.clone();
        let mut segments = Vec::new();

        for segment in path.split('/').filter(|s| !s.is_empty() && *s != ".") {
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(_)), None) => {}
                _ => return None,
            }
            host.push(segment);
            segments.push(segment);
        }

        Some((host, segments.join("/")))
    }
}

impl TreeProvider for FilesystemTreeProvider {
    fn list_children(&self, path: &str) -> Result<Vec<Entry>, AppError> {
        let Some((host, base)) = self.resolve(path) else {
            warn!(path, "catalog path escapes the local root; treating as empty");
            return Ok(Vec::new());
        };
        if !host.is_dir() {
            debug!(path, "local directory not found; treating as empty");
            return Ok(Vec::new());
        }

        let read_dir = fs::read_dir(&host).map_err(|e| AppError::fetch(path, e))?;

        let mut entries = Vec::new();
        for item in read_dir {
            let item = item.map_err(|e| AppError::fetch(path, e))?;
            let file_type = item.file_type().map_err(|e| AppError::fetch(path, e))?;
            let Ok(name) = item.file_name().into_string() else {
                warn!(path, "skipping entry with a non UTF-8 name");
                continue;
            };
            let kind = if file_type.is_dir() { EntryKind::Directory } else { EntryKind::File };
            let entry_path = catalog::join(&base, &name);
            entries.push(Entry { name, kind, path: entry_path });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn fetch_file(&self, path: &str) -> Result<String, AppError> {
        let Some((host, _)) = self.resolve(path) else {
            return Err(AppError::fetch(path, "path escapes catalog root"));
        };
        debug!(path, host = %host.display(), "reading local file");
        fs::read_to_string(&host).map_err(|e| AppError::fetch(path, e))
    }
}
