use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while collecting or searching PDF files
#[derive(Debug, Error)]
pub enum SearchError {
    /// Directory to scan is missing or is not a directory
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// File could not be parsed as a PDF. The search pipeline recovers this
    /// per file; it is only surfaced by extractors.
    #[error("Could not read {} as a PDF: {reason}", .path.display())]
    CorruptDocument { path: PathBuf, reason: String },

    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SearchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SearchError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
