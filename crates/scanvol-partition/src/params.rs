//! Parameters for chunk partitioning.

/// Parameters for chunk partitioning.
///
/// The nominal chunk extents define the grid stride per axis. The z range
/// of the grid is additionally capped at `z_cap`: source volumes are only
/// ever sampled up to a fixed depth, regardless of how far the mesh's
/// bounding box reaches in z.
///
/// # Example
///
/// ```
/// use scanvol_partition::PartitionParams;
///
/// let params = PartitionParams::default();
/// assert_eq!(params.chunk_width, 150);
/// assert_eq!(params.chunk_depth, 100);
/// assert_eq!(params.z_cap, 100);
///
/// let coarse = PartitionParams::default().chunk_width(300).chunk_height(300);
/// assert_eq!(coarse.chunk_width, 300);
/// ```
#[derive(Debug, Clone)]
pub struct PartitionParams {
    /// Nominal chunk width (x stride).
    pub chunk_width: u32,

    /// Nominal chunk height (y stride).
    pub chunk_height: u32,

    /// Nominal chunk depth (z stride).
    pub chunk_depth: u32,

    /// Exclusive upper bound for z grid origins, applied regardless of the
    /// mesh's actual z extent.
    pub z_cap: u32,
}

impl Default for PartitionParams {
    fn default() -> Self {
        Self {
            chunk_width: 150,
            chunk_height: 150,
            chunk_depth: 100,
            z_cap: 100,
        }
    }
}

impl PartitionParams {
    /// Create params with uniform chunk extents.
    #[must_use]
    pub const fn uniform(extent: u32) -> Self {
        Self {
            chunk_width: extent,
            chunk_height: extent,
            chunk_depth: extent,
            z_cap: 100,
        }
    }

    /// Set the nominal chunk width.
    #[must_use]
    pub const fn chunk_width(mut self, width: u32) -> Self {
        self.chunk_width = width;
        self
    }

    /// Set the nominal chunk height.
    #[must_use]
    pub const fn chunk_height(mut self, height: u32) -> Self {
        self.chunk_height = height;
        self
    }

    /// Set the nominal chunk depth.
    #[must_use]
    pub const fn chunk_depth(mut self, depth: u32) -> Self {
        self.chunk_depth = depth;
        self
    }

    /// Set the z origin cap.
    #[must_use]
    pub const fn z_cap(mut self, cap: u32) -> Self {
        self.z_cap = cap;
        self
    }
}
