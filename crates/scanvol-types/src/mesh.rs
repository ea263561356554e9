//! The parsed segment mesh.

use nalgebra::{Point2, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BoundingBox, Face};

/// A parsed segment mesh.
///
/// This is the primary aggregate for Scanvol. It stores the vertex
/// positions, normals and texture coordinates as parallel, independently
/// sized sequences, plus the face records and the derived bounding box.
///
/// # Memory Layout
///
/// Each attribute is a contiguous array, matching the column-wise numeric
/// work done on it (centroid and deviation are computed over the whole
/// position array at once).
///
/// # Immutability
///
/// A mesh is constructed once by the loader and never mutated; the bounding
/// box is derived from the positions at construction time and stays
/// consistent with them.
///
/// # Example
///
/// ```
/// use scanvol_types::{Point3, SegmentMesh};
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 10.0, 10.0),
/// ];
/// let mesh = SegmentMesh::from_parts(positions, vec![], vec![], vec![]).unwrap();
///
/// assert_eq!(mesh.vertex_count(), 2);
/// assert_eq!(mesh.bounds.max, Point3::new(10.0, 10.0, 10.0));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentMesh {
    /// Vertex positions in scan voxel coordinates.
    pub positions: Vec<Point3<f64>>,

    /// Vertex normals. Parallel to but independent in length from positions.
    pub normals: Vec<Vector3<f64>>,

    /// Texture coordinates.
    pub uvs: Vec<Point2<f64>>,

    /// Face records referencing the arrays above by 0-based index.
    pub faces: Vec<Face>,

    /// Bounding box derived from the positions.
    pub bounds: BoundingBox,
}

impl SegmentMesh {
    /// Build a mesh from its parsed arrays, deriving the bounding box.
    ///
    /// Returns `None` when `positions` is empty: the centroid-deviation
    /// bounding box is undefined for zero vertices.
    ///
    /// # Example
    ///
    /// ```
    /// use scanvol_types::SegmentMesh;
    ///
    /// assert!(SegmentMesh::from_parts(vec![], vec![], vec![], vec![]).is_none());
    /// ```
    #[must_use]
    pub fn from_parts(
        positions: Vec<Point3<f64>>,
        normals: Vec<Vector3<f64>>,
        uvs: Vec<Point2<f64>>,
        faces: Vec<Face>,
    ) -> Option<Self> {
        let bounds = BoundingBox::from_positions(&positions)?;
        Some(Self {
            positions,
            normals,
            uvs,
            faces,
            bounds,
        })
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::FaceCorner;
    use approx::assert_relative_eq;

    #[test]
    fn from_parts_derives_bounds() {
        let positions = vec![
            Point3::new(2.0, 2.0, 2.0),
            Point3::new(8.0, 6.0, 4.0),
        ];
        let mesh = SegmentMesh::from_parts(positions, vec![], vec![], vec![]).unwrap();
        assert_relative_eq!(mesh.bounds.min.x, 2.0);
        assert_relative_eq!(mesh.bounds.max.y, 6.0);
    }

    #[test]
    fn from_parts_rejects_empty() {
        assert!(SegmentMesh::from_parts(vec![], vec![], vec![], vec![]).is_none());
    }

    #[test]
    fn attribute_lengths_are_independent() {
        let positions = vec![Point3::new(1.0, 1.0, 1.0)];
        let normals = vec![
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        let uvs = vec![Point2::new(0.5, 0.5)];
        let faces = vec![Face::new(vec![
            FaceCorner::new(vec![Some(0)]),
            FaceCorner::new(vec![Some(0)]),
            FaceCorner::new(vec![Some(0)]),
        ])];

        let mesh = SegmentMesh::from_parts(positions, normals, uvs, faces).unwrap();
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.normals.len(), 2);
        assert_eq!(mesh.uvs.len(), 1);
        assert_eq!(mesh.face_count(), 1);
    }
}
