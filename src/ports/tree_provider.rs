//! Catalog tree port definition.

use crate::domain::{AppError, Entry};

/// Port for reading a catalog tree, hosted or mirrored locally.
///
/// Paths are relative to the catalog repository root and use `/`.
pub trait TreeProvider {
    /// Immediate children of `path`.
    ///
    /// A missing or empty directory yields an empty listing, not an error.
    fn list_children(&self, path: &str) -> Result<Vec<Entry>, AppError>;

    /// Full text of the file at `path`.
    ///
    /// Fails with [`AppError::Fetch`] naming the path and the underlying cause.
    fn fetch_file(&self, path: &str) -> Result<String, AppError>;
}

impl<T: TreeProvider + ?Sized> TreeProvider for &T {
    fn list_children(&self, path: &str) -> Result<Vec<Entry>, AppError> {
        (**self).list_children(path)
    }

    fn fetch_file(&self, path: &str) -> Result<String, AppError> {
        (**self).fetch_file(path)
    }
}

impl<T: TreeProvider + ?Sized> TreeProvider for Box<T> {
    fn list_children(&self, path: &str) -> Result<Vec<Entry>, AppError> {
        (**self).list_children(path)
    }

    fn fetch_file(&self, path: &str) -> Result<String, AppError> {
        (**self).fetch_file(path)
    }
}
