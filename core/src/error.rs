//! Error taxonomy shared by every file and statistics operation.

use thiserror::Error;

/// Errors that can occur while operating on the sandboxed tree
///
/// The message carried by the first three variants is meant for the caller
/// and is returned verbatim in HTTP response bodies.
#[derive(Error, Debug)]
pub enum FileError {
    /// Malformed target: trailing separator on create, or a path that
    /// leaves the root directory.
    #[error("{0}")]
    InvalidPath(String),

    /// Resource already exists
    #[error("{0}")]
    Conflict(String),

    /// Resource absent
    #[error("{0}")]
    NotFound(String),

    /// Any other filesystem failure (permissions, non-empty directory, ...)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for file operations
pub type Result<T> = std::result::Result<T, FileError>;
