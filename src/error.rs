//! Error types for cargo-bump.
//!
//! All operations return `Result<T>` which aliases `Result<T, BumpError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from version bump operations.
#[derive(Debug, Error)]
pub enum BumpError {
    /// Standard input closed before a new version was entered.
    #[error("No new version entered (standard input was closed)")]
    NoInput,

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Directory traversal failed.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Replacing a manifest with its rewritten copy failed.
    #[error("Failed to replace {}: {}", .path.display(), .source.error)]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cargo-bump operations.
pub type Result<T> = std::result::Result<T, BumpError>;
