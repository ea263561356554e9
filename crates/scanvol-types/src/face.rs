//! Face records and per-corner index groups.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One corner of a face record.
///
/// In the surface format a corner is a `/`-joined group of indices
/// (position, uv, normal), any of which may be absent depending on the
/// format variant (`v`, `v/vt`, `v//vn`, `v/vt/vn`). The groups are stored
/// exactly as written, converted to 0-based, with absent groups kept as
/// `None` so they round-trip as absent rather than as a placeholder.
///
/// # Example
///
/// ```
/// use scanvol_types::FaceCorner;
///
/// // "3//7" on disk: position 3, no uv, normal 7 (1-based).
/// let corner = FaceCorner::new(vec![Some(2), None, Some(6)]);
/// assert_eq!(corner.position(), Some(2));
/// assert_eq!(corner.uv(), None);
/// assert_eq!(corner.normal(), Some(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceCorner {
    groups: Vec<Option<u32>>,
}

impl FaceCorner {
    /// Create a corner from its 0-based index groups.
    #[inline]
    #[must_use]
    pub const fn new(groups: Vec<Option<u32>>) -> Self {
        Self { groups }
    }

    /// The 0-based vertex position index, if present.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Option<u32> {
        self.group(0)
    }

    /// The 0-based texture coordinate index, if present.
    #[inline]
    #[must_use]
    pub fn uv(&self) -> Option<u32> {
        self.group(1)
    }

    /// The 0-based normal index, if present.
    #[inline]
    #[must_use]
    pub fn normal(&self) -> Option<u32> {
        self.group(2)
    }

    /// All index groups in on-disk order.
    ///
    /// The length records how many `/`-separated groups the corner was
    /// written with, which serializers must preserve.
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[Option<u32>] {
        &self.groups
    }

    fn group(&self, i: usize) -> Option<u32> {
        self.groups.get(i).copied().flatten()
    }
}

/// A face record: an ordered sequence of corners.
///
/// A well-formed face has at least 3 corners; the loader enforces this.
///
/// # Example
///
/// ```
/// use scanvol_types::{Face, FaceCorner};
///
/// let face = Face::new(vec![
///     FaceCorner::new(vec![Some(0)]),
///     FaceCorner::new(vec![Some(1)]),
///     FaceCorner::new(vec![Some(2)]),
/// ]);
/// assert_eq!(face.corner_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// The corners of this face, in record order.
    pub corners: Vec<FaceCorner>,
}

impl Face {
    /// Create a face from its corners.
    #[inline]
    #[must_use]
    pub const fn new(corners: Vec<FaceCorner>) -> Self {
        Self { corners }
    }

    /// Number of corners in this face.
    #[inline]
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }
}
