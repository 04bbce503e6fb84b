//! Error types for patch-fs

use std::path::PathBuf;

/// Result type for patch-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in patch-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} rule file at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported rule file format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("{path} was modified since it was read (expected {expected}, found {actual})")]
    ModifiedSinceRead {
        path: PathBuf,
        expected: String,
        actual: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
