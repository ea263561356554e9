//! Error types for OBJ loading and saving.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for OBJ operations.
pub type ObjResult<T> = Result<T, ObjError>;

/// Errors that can occur while loading or saving an OBJ segment mesh.
///
/// Parse failures are fatal: nothing downstream is partially partitioned
/// when the input is malformed.
#[derive(Debug, Error)]
pub enum ObjError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The file contained zero vertices.
    ///
    /// The centroid-deviation bounding box is undefined without vertices,
    /// so an empty mesh cannot be represented.
    #[error("mesh has no vertices")]
    EmptyMesh,

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Integer parsing error.
    #[error("integer parsing error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl ObjError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
