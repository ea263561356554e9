//! Volumetric image stacks.

/// A 3D block of voxel intensities for one chunk.
///
/// Voxels are stored x-fastest: index `(z * height + y) * width + x`.
/// Intensities are 16-bit, matching the source scan volumes.
///
/// # Example
///
/// ```
/// use scanvol_export::ImageStack;
///
/// let mut stack = ImageStack::new(4, 4, 2);
/// assert_eq!(stack.shape(), (4, 4, 2));
/// assert!(stack.set_voxel(1, 2, 1, 4095));
/// assert_eq!(stack.voxel(1, 2, 1), Some(4095));
/// assert_eq!(stack.voxel(4, 0, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStack {
    width: u32,
    height: u32,
    depth: u32,
    data: Vec<u16>,
}

impl ImageStack {
    /// Create a zero-filled stack with the given shape.
    #[must_use]
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        let len = width as usize * height as usize * depth as usize;
        Self {
            width,
            height,
            depth,
            data: vec![0; len],
        }
    }

    /// Create a stack from existing voxel data.
    ///
    /// Returns `None` if `data.len()` does not match the shape.
    #[must_use]
    pub fn from_data(width: u32, height: u32, depth: u32, data: Vec<u16>) -> Option<Self> {
        let len = width as usize * height as usize * depth as usize;
        if data.len() != len {
            return None;
        }
        Some(Self {
            width,
            height,
            depth,
            data,
        })
    }

    /// The stack shape as `(width, height, depth)`.
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.depth)
    }

    /// Total number of voxels.
    #[inline]
    #[must_use]
    pub fn voxel_count(&self) -> usize {
        self.data.len()
    }

    /// Read one voxel; `None` when out of range.
    #[must_use]
    pub fn voxel(&self, x: u32, y: u32, z: u32) -> Option<u16> {
        self.data.get(self.index(x, y, z)?).copied()
    }

    /// Write one voxel; returns false when out of range.
    pub fn set_voxel(&mut self, x: u32, y: u32, z: u32, value: u16) -> bool {
        match self.index(x, y, z) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    /// The raw voxel data, x-fastest.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u16] {
        &self.data
    }

    fn index(&self, x: u32, y: u32, z: u32) -> Option<usize> {
        if x >= self.width || y >= self.height || z >= self.depth {
            return None;
        }
        Some((z as usize * self.height as usize + y as usize) * self.width as usize + x as usize)
    }
}
