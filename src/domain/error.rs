use std::io;

use thiserror::Error;

/// Library-wide error type for prompt-charter operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Reading a catalog file or listing a catalog directory failed.
    #[error("Failed to fetch '{path}': {cause}")]
    Fetch { path: String, cause: String },

    /// No domain under the catalog root contains a rule set.
    #[error("No rule sets available yet. Check back soon!")]
    NoRuleSetsAvailable,

    /// Interactive descent reached a directory with nowhere left to go.
    #[error("No RULES.md found in '{path}'")]
    DeadEnd { path: String },

    /// The interactive prompt could not be shown or read.
    #[error("{0}")]
    Prompt(String),

    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn fetch<P: Into<String>, C: ToString>(path: P, cause: C) -> Self {
        AppError::Fetch { path: path.into(), cause: cause.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) => io::ErrorKind::InvalidInput,
            AppError::NoRuleSetsAvailable | AppError::DeadEnd { .. } => io::ErrorKind::NotFound,
            AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::Fetch { .. } | AppError::Http(_) => io::ErrorKind::Other,
        }
    }
}
