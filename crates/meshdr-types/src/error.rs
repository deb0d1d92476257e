//! Error types for meshdr.
//!
//! All crates return `MeshdrResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for meshdr.
#[derive(Debug, Error)]
pub enum MeshdrError {
    /// Input mesh is missing, unreadable, or empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A point cloud or displacement field has the wrong length or shape.
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        expected: String,
        actual: String,
    },

    /// An operation was called before the object was ready for it.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MeshdrError {
    /// Builds a `ShapeMismatch` from two point counts.
    pub fn point_count(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            expected: format!("{expected} points"),
            actual: format!("{actual} points"),
        }
    }
}

/// Convenience alias for `Result<T, MeshdrError>`.
pub type MeshdrResult<T> = Result<T, MeshdrError>;
