//! Segment-to-chunk toolkit for volumetric scan extraction.
//!
//! This umbrella crate re-exports all scanvol-* crates, providing a unified
//! API for turning a triangulated segment surface (a Wavefront OBJ in scan
//! voxel coordinates) into axis-aligned chunks and per-chunk volume files.
//!
//! # Quick Start
//!
//! ```no_run
//! use scanvol::prelude::*;
//!
//! // Load a segment mesh
//! let mesh = scanvol::obj::load_obj("segment.obj").unwrap();
//!
//! // Partition it into occupied chunks
//! let chunks = scanvol::partition::partition_mesh(&mesh, &PartitionParams::default());
//! for chunk in &chunks {
//!     println!("{}: {:?} {:?}", chunk.id, chunk.origin, chunk.size);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `SegmentMesh`, `Face`, `BoundingBox`
//! - [`obj`] - Wavefront OBJ loading and saving
//! - [`partition`] - Fixed-stride spatial partitioning into occupied chunks
//! - [`export`] - Per-chunk volume export, segment collection, manifests
//!
//! # Feature Flags
//!
//! - `serde` - Serde derives on the geometry and chunk types

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `SegmentMesh`, `Face`, `BoundingBox`.
pub use scanvol_types as types;

/// Wavefront OBJ loading and saving.
pub use scanvol_obj as obj;

/// Fixed-stride spatial partitioning into occupied chunks.
pub use scanvol_partition as partition;

/// Per-chunk volume export, segment collection, manifests.
pub use scanvol_export as export;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for segment processing.
///
/// # Usage
///
/// ```
/// use scanvol::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use scanvol_types::{BoundingBox, Face, FaceCorner, Point3, SegmentMesh};

    // I/O
    pub use scanvol_obj::{load_obj, save_obj};

    // Partitioning
    pub use scanvol_partition::{partition_mesh, Chunk, PartitionParams};

    // Export (main use case)
    pub use scanvol_export::{export_segment, ExportParams, VolumeReader, VolumeWriter};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prelude_imports() {
        use prelude::*;

        let mesh =
            SegmentMesh::from_parts(vec![Point3::new(1.0, 2.0, 3.0)], vec![], vec![], vec![])
                .unwrap();
        assert_eq!(mesh.vertex_count(), 1);
        assert!(partition_mesh(&mesh, &PartitionParams::default()).is_empty());
    }

    #[test]
    fn module_reexports() {
        let _ = partition::PartitionParams::default();
        let _ = export::ExportParams::default();
        let _ = export::SamplingParams::default();
    }
}
