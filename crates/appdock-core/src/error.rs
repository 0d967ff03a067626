//! Error types for appdock.
//!
//! Only two failures are expected to reach the user as plain messages: a
//! package that does not exist and a package that could not be moved. Every
//! other variant is an unexpected I/O or environment problem.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the appdock library.
#[derive(Debug, Error)]
pub enum AppDockError {
    #[error("File not found: {0}")]
    PackageNotFound(PathBuf),

    #[error("Could not move {src} to {dest}: {source}")]
    RelocationFailed {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid package path {path}: {reason}")]
    InvalidPackagePath { path: PathBuf, reason: String },

    // Icon extraction errors (recovered inside the icon step)
    #[error("Package extraction failed: {message}")]
    ExtractionFailed { message: String },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for appdock operations.
pub type Result<T> = std::result::Result<T, AppDockError>;

impl From<std::io::Error> for AppDockError {
    fn from(err: std::io::Error) -> Self {
        AppDockError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl AppDockError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        AppDockError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Whether this error ends the run with a plain message instead of a
    /// failing exit status.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppDockError::PackageNotFound(_) | AppDockError::RelocationFailed { .. }
        )
    }
}
