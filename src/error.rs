//! Error handling for the sort harness

use std::io;
use thiserror::Error;

/// Custom error type for harness operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("No such file or directory: {path}")]
    NotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Invalid sort mode: {name}")]
    InvalidMode { name: String },

    #[error("Invalid ingest strategy: {name}")]
    InvalidStrategy { name: String },

    #[error("Output is not sorted at record {index}")]
    NotSorted { index: usize },
}

impl SortError {
    /// Returns the appropriate process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::PermissionDenied { .. }
            | SortError::NotFound { .. }
            | SortError::NotADirectory { .. }
            | SortError::Io(_) => crate::SORT_FAILURE,

            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: &str) -> Self {
        SortError::PermissionDenied {
            path: path.to_string(),
        }
    }

    /// Create a not found error
    pub fn not_found(path: &str) -> Self {
        SortError::NotFound {
            path: path.to_string(),
        }
    }

    /// Create a not-a-directory error
    pub fn not_a_directory(path: &str) -> Self {
        SortError::NotADirectory {
            path: path.to_string(),
        }
    }

    /// Create an invalid mode error
    pub fn invalid_mode(name: &str) -> Self {
        SortError::InvalidMode {
            name: name.to_string(),
        }
    }

    /// Create an invalid strategy error
    pub fn invalid_strategy(name: &str) -> Self {
        SortError::InvalidStrategy {
            name: name.to_string(),
        }
    }

    /// Create a not sorted error
    pub fn not_sorted(index: usize) -> Self {
        SortError::NotSorted { index }
    }
}

/// Result type for harness operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for attaching a file path to raw I/O errors
pub trait SortContext<T> {
    fn with_path_context(self, path: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_path_context(self, path: &str) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => SortError::permission_denied(path),
            io::ErrorKind::NotFound => SortError::not_found(path),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", path, io_err),
            )),
        })
    }
}
