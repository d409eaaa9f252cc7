//! Error types for tree operations.

use thiserror::Error;

/// Structured error types for tree operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// No entry matched the addressed path. The path is fully qualified:
    /// the view's origin plus the segments consumed before the miss.
    #[error("Element \"{path}\" not found")]
    NotFound { path: String },

    /// A structural mutation was attempted through an immutable view.
    #[error("Immutable tree: {operation} is not allowed")]
    Immutable { operation: String },
}

impl TreeError {
    /// Check if this error is a failed path lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::NotFound { .. })
    }

    /// Check if this error is a rejected mutation
    pub fn is_immutable(&self) -> bool {
        matches!(self, TreeError::Immutable { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            TreeError::NotFound { path } => Some(path),
            _ => None,
        }
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
