//! Spatial chunk partitioning for Scanvol.
//!
//! A parsed segment mesh occupies a small, irregular region of a very large
//! scan volume. This crate decomposes the mesh's bounding box into a regular
//! grid of fixed-stride, boundary-clamped [`Chunk`]s and keeps only the grid
//! cells that actually contain mesh vertices, so each chunk can be extracted
//! and exported as an independent volumetric block.
//!
//! # Determinism
//!
//! The grid is walked x-major, y-mid, z-minor, and chunk ids are assigned by
//! emission order. The output is fully deterministic for a given mesh and
//! parameter set, which downstream extraction relies on.
//!
//! # Example
//!
//! ```
//! use scanvol_partition::{partition_mesh, PartitionParams};
//! use scanvol_types::{Point3, SegmentMesh};
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(120.0, 90.0, 60.0),
//! ];
//! let mesh = SegmentMesh::from_parts(positions, vec![], vec![], vec![]).unwrap();
//!
//! let chunks = partition_mesh(&mesh, &PartitionParams::default());
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].id, "0");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod chunk;
mod params;
mod partition;

pub use chunk::{Chunk, ChunkOrigin, ChunkSize};
pub use params::PartitionParams;
pub use partition::partition_mesh;
