//! Error types for document operations.

use thiserror::Error;

/// Errors that can occur while addressing an attribute document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The lookup path is not a well-formed absolute path.
    #[error("invalid lookup path: {path}: {reason}")]
    InvalidPath { path: String, reason: String },
}

/// Convenience type alias for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
