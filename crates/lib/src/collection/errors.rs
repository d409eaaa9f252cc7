//! Error types for collection operations.

use thiserror::Error;

/// Structured error types for collection operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    /// Positional access outside the collection bounds.
    #[error("Invalid index {index} for collection of length {len}")]
    InvalidIndex { index: usize, len: usize },
}

impl CollectionError {
    /// Check if this error is an out-of-range index
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, CollectionError::InvalidIndex { .. })
    }
}

// Conversion from CollectionError to the main Error type
impl From<CollectionError> for crate::Error {
    fn from(err: CollectionError) -> Self {
        crate::Error::Collection(err)
    }
}
