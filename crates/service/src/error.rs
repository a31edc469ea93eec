//! Typed error enum for the service layer.
//!
//! Unifies storage and query pipeline failures into a single error type so the
//! transport can map each kind to a status code without downcasting.

use contactbook_core::QueryError;
use contactbook_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and query failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (backend down, not found, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Filter or sort referenced something the schema doesn't have.
    #[error("query: {0}")]
    Query(#[from] QueryError),

    /// Caller provided invalid input (blank required fields).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_not_found())
    }
}
