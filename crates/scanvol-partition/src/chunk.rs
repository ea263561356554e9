//! Chunk descriptors.

use scanvol_types::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer origin of a chunk in scan voxel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChunkOrigin {
    /// X coordinate of the chunk's minimum corner.
    pub x: u32,
    /// Y coordinate of the chunk's minimum corner.
    pub y: u32,
    /// Z coordinate of the chunk's minimum corner.
    pub z: u32,
}

impl ChunkOrigin {
    /// Create a new origin.
    #[inline]
    #[must_use]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

/// Integer extent of a chunk along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChunkSize {
    /// Width (x extent).
    pub w: u32,
    /// Height (y extent).
    pub h: u32,
    /// Depth (z extent).
    pub d: u32,
}

impl ChunkSize {
    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(w: u32, h: u32, d: u32) -> Self {
        Self { w, h, d }
    }
}

/// One axis-aligned sub-region of a segment's bounding box.
///
/// Chunks are produced by [`partition_mesh`] and are immutable once
/// emitted. Ids are dense, zero-based and gap-free, assigned strictly in
/// emission order; a discarded grid candidate consumes no id.
///
/// # Example
///
/// ```
/// use scanvol_partition::{Chunk, ChunkOrigin, ChunkSize};
/// use scanvol_types::Point3;
///
/// let chunk = Chunk::new("0", ChunkOrigin::new(0, 0, 0), ChunkSize::new(150, 150, 100));
/// assert!(chunk.contains(&Point3::new(10.0, 10.0, 10.0)));
/// assert!(!chunk.contains(&Point3::new(150.0, 10.0, 10.0)));
/// ```
///
/// [`partition_mesh`]: crate::partition_mesh
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chunk {
    /// Unique sequential id, assigned in generation order.
    pub id: String,
    /// Minimum corner of the chunk.
    pub origin: ChunkOrigin,
    /// Extent of the chunk along each axis.
    pub size: ChunkSize,
}

impl Chunk {
    /// Create a new chunk.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, origin: ChunkOrigin, size: ChunkSize) -> Self {
        Self {
            id: id.into(),
            origin,
            size,
        }
    }

    /// Check whether a point lies in this chunk's half-open box
    /// `[origin, origin + size)`.
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        let x0 = f64::from(self.origin.x);
        let y0 = f64::from(self.origin.y);
        let z0 = f64::from(self.origin.z);
        point.x >= x0
            && point.x < x0 + f64::from(self.size.w)
            && point.y >= y0
            && point.y < y0 + f64::from(self.size.h)
            && point.z >= z0
            && point.z < z0 + f64::from(self.size.d)
    }
}
