//! Error types for the export pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting chunk volumes.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The segment mesh could not be loaded.
    #[error("failed to load segment mesh: {0}")]
    Mesh(#[from] scanvol_obj::ObjError),

    /// A collaborator produced an image stack whose shape does not match
    /// the chunk it was read for.
    #[error("chunk {id}: expected stack shape {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Id of the offending chunk.
        id: String,
        /// Shape implied by the chunk size and sampling factors.
        expected: (u32, u32, u32),
        /// Shape the volume reader actually produced.
        got: (u32, u32, u32),
    },

    /// Failed to write to a specific path.
    #[error("failed to write to {path}: {source}")]
    IoWrite {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest (de)serialization error.
    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}
