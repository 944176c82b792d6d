//! Store error types

use thiserror::Error;

use crate::storage::{DecodeError, EncodeError};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a catalog store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No product carries the requested key
    #[error("product not found: {0}")]
    NotFound(String),

    /// The data file could not be loaded
    #[error("failed to load catalog: {0}")]
    Decode(#[from] DecodeError),

    /// The data file could not be saved
    #[error("failed to save catalog: {0}")]
    Encode(#[from] EncodeError),
}

impl StoreError {
    /// Returns true for the `NotFound` variant
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
