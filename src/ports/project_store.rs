use std::path::PathBuf;

use crate::domain::AppError;

/// Port for the installed rules artifact inside the user's project.
pub trait ProjectStore {
    /// Location of the installed rules file.
    fn rules_path(&self) -> PathBuf;

    /// Whether a rules file is already installed.
    fn rules_exist(&self) -> bool;

    /// Write `content` as the installed rules file, replacing any existing one.
    ///
    /// The write is all-or-nothing: on failure no partial file is left behind.
    fn write_rules(&self, content: &str) -> Result<PathBuf, AppError>;

    /// Write `content` as a new rules file.
    ///
    /// Fails with an `io::ErrorKind::AlreadyExists` error when a rules file is
    /// present, leaving it untouched.
    fn create_rules(&self, content: &str) -> Result<PathBuf, AppError>;
}
