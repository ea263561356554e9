//! Chunk grid generation.

// Grid origins and extents fit comfortably in the integer types used here.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use scanvol_types::{Point3, SegmentMesh};
use tracing::{debug, info, warn};

use crate::chunk::{Chunk, ChunkOrigin, ChunkSize};
use crate::params::PartitionParams;

/// Decompose a segment mesh's bounding box into occupied chunks.
///
/// A regular grid is laid over the bounding box with the nominal chunk
/// extents as stride, x-major, y-mid, z-minor; z origins run up to
/// `params.z_cap` instead of the box's own max-z. Every candidate cell is
/// clamped against the box's max corner and kept only if at least one mesh
/// vertex falls inside its half-open extent. Ids count emitted chunks, so
/// they are dense and gap-free in emission order.
///
/// A degenerate bounding box is not an error; the pass simply emits fewer
/// or zero chunks.
///
/// # Example
///
/// ```
/// use scanvol_partition::{partition_mesh, PartitionParams};
/// use scanvol_types::{Point3, SegmentMesh};
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(120.0, 90.0, 60.0),
/// ];
/// let mesh = SegmentMesh::from_parts(positions, vec![], vec![], vec![]).unwrap();
///
/// let chunks = partition_mesh(&mesh, &PartitionParams::default());
/// assert_eq!(chunks.len(), 1);
/// assert_eq!((chunks[0].size.w, chunks[0].size.h), (120, 90));
/// ```
#[must_use]
pub fn partition_mesh(mesh: &SegmentMesh, params: &PartitionParams) -> Vec<Chunk> {
    if params.chunk_width == 0 || params.chunk_height == 0 || params.chunk_depth == 0 {
        warn!("zero chunk extent, nothing to partition");
        return Vec::new();
    }

    let bounds = &mesh.bounds;
    let z_ceiling = f64::from(params.z_cap);

    info!(
        vertices = mesh.vertex_count(),
        min = ?bounds.min,
        max = ?bounds.max,
        "Partitioning segment bounding box"
    );

    // The clamped extents persist for the rest of the pass: once a trailing
    // cell shrinks w/h/d, later candidates inherit the shrunken nominal
    // extent. Emitted chunk sizes depend on this exact behavior.
    // TODO: evaluate resetting the extents per candidate; that is the saner
    // grid, but it changes the size of every chunk emitted after the first
    // clamp and breaks compatibility with existing exports.
    let mut w = f64::from(params.chunk_width);
    let mut h = f64::from(params.chunk_height);
    let mut d = f64::from(params.chunk_depth);

    let mut chunks = Vec::new();

    for x in grid_origins(bounds.min.x, bounds.max.x, params.chunk_width) {
        for y in grid_origins(bounds.min.y, bounds.max.y, params.chunk_height) {
            for z in grid_origins(bounds.min.z, z_ceiling, params.chunk_depth) {
                let x = x.max(0);
                let y = y.max(0);
                let z = z.max(0);

                let (xf, yf, zf) = (x as f64, y as f64, z as f64);
                if xf + w > bounds.max.x {
                    w = bounds.max.x - xf;
                }
                if yf + h > bounds.max.y {
                    h = bounds.max.y - yf;
                }
                if zf + d > z_ceiling {
                    d = z_ceiling - zf;
                }

                if !any_vertex_inside(&mesh.positions, (xf, yf, zf), (w, h, d)) {
                    continue;
                }

                let chunk = Chunk::new(
                    chunks.len().to_string(),
                    ChunkOrigin::new(x as u32, y as u32, z as u32),
                    ChunkSize::new(w as u32, h as u32, d as u32),
                );
                debug!(id = %chunk.id, x, y, z, "Emitting occupied chunk");
                chunks.push(chunk);
            }
        }
    }

    info!(chunks = chunks.len(), "Partitioning complete");
    chunks
}

/// Grid origins along one axis: `floor(min)` up to (exclusive) `floor(max)`
/// in steps of the nominal stride.
fn grid_origins(min: f64, max: f64, stride: u32) -> impl Iterator<Item = i64> {
    let start = min.floor() as i64;
    let end = max.floor() as i64;
    (start..end).step_by(stride as usize)
}

/// Test whether any vertex falls in the half-open box
/// `[x, x+w) x [y, y+h) x [z, z+d)`.
fn any_vertex_inside(
    positions: &[Point3<f64>],
    origin: (f64, f64, f64),
    extent: (f64, f64, f64),
) -> bool {
    let (x, y, z) = origin;
    let (w, h, d) = extent;
    positions
        .iter()
        .any(|p| p.x >= x && p.x < x + w && p.y >= y && p.y < y + h && p.z >= z && p.z < z + d)
}
