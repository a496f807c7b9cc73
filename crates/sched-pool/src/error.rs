//! Error types for pool record extraction.

use sched_document::DocumentError;
use thiserror::Error;

/// Errors that can occur while building a pool record from its document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    /// A required field had no value in the document.
    #[error("missing required field: {path}")]
    MissingField { path: String },

    /// Two documents in one batch resolved to the same datastore id.
    #[error("duplicate datastore id: {id}")]
    DuplicateId { id: i32 },

    /// The underlying document rejected a lookup.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
}

/// Convenience type alias for pool operations.
pub type Result<T> = std::result::Result<T, PoolError>;
