//! Record store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the store itself (never "no such document" — lookups report
/// absence through `Option`, not through an error)
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store cannot serve the call (poisoned lock, lost connection)
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    /// Submitted fields cannot form a document
    #[error("malformed record: {0}")]
    Malformed(String),
}

impl StoreError {
    /// Poisoned-lock failure, the in-memory store's only transport error
    pub fn poisoned() -> Self {
        Self::Unavailable("lock poisoned".to_string())
    }
}
