//! Core segment-mesh types for Scanvol.
//!
//! This crate provides the foundational types for segment processing:
//!
//! - [`SegmentMesh`] - A parsed surface mesh with positions, normals, uvs and faces
//! - [`Face`] / [`FaceCorner`] - Per-corner index groups of a face record
//! - [`BoundingBox`] - The centroid-deviation bounding box of a segment
//!
//! # Engine-Agnostic Crate
//!
//! This crate has no engine or I/O dependencies. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Python bindings
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64` and are
//! interpreted downstream as voxel coordinates of the source scan volume.
//!
//! # Example
//!
//! ```
//! use scanvol_types::{SegmentMesh, Point3};
//!
//! let positions = vec![
//!     Point3::new(10.0, 10.0, 10.0),
//!     Point3::new(20.0, 10.0, 10.0),
//! ];
//!
//! let mesh = SegmentMesh::from_parts(positions, vec![], vec![], vec![]).unwrap();
//! assert_eq!(mesh.vertex_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod face;
mod mesh;

// Re-export core types
pub use bounds::BoundingBox;
pub use face::{Face, FaceCorner};
pub use mesh::SegmentMesh;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
