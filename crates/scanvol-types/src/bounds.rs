//! Centroid-deviation bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The axis-aligned bounding box of a segment mesh.
///
/// Unlike a tight min/max envelope, this box is **symmetric around the
/// vertex centroid**: on each axis it extends from the centroid by the
/// maximum absolute deviation of any vertex on that axis. On axes where the
/// vertex distribution is asymmetric the box is therefore larger than the
/// tight envelope. Negative components of either corner are clamped to 0,
/// since scan volumes have no negative voxel coordinates.
///
/// # Example
///
/// ```
/// use scanvol_types::{BoundingBox, Point3};
///
/// let positions = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 4.0, 2.0),
/// ];
///
/// let bounds = BoundingBox::from_positions(&positions).unwrap();
/// // Centroid is (5, 2, 1), max deviation (5, 2, 1).
/// assert_eq!(bounds.min, Point3::new(0.0, 0.0, 0.0));
/// assert_eq!(bounds.max, Point3::new(10.0, 4.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    /// Minimum corner, clamped to non-negative components.
    pub min: Point3<f64>,
    /// Maximum corner, clamped to non-negative components.
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// Compute the bounding box of a set of vertex positions.
    ///
    /// The box is `centroid ± max_deviation` per axis, with negative
    /// components clamped to exactly 0.
    ///
    /// Returns `None` for an empty slice, since the centroid is undefined.
    ///
    /// # Example
    ///
    /// ```
    /// use scanvol_types::{BoundingBox, Point3};
    ///
    /// assert!(BoundingBox::from_positions(&[]).is_none());
    ///
    /// let bounds = BoundingBox::from_positions(&[Point3::new(3.0, 4.0, 5.0)]).unwrap();
    /// assert_eq!(bounds.min, bounds.max);
    /// ```
    #[must_use]
    pub fn from_positions(positions: &[Point3<f64>]) -> Option<Self> {
        if positions.is_empty() {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = positions.len() as f64;
        let mut sum = Vector3::zeros();
        for p in positions {
            sum += p.coords;
        }
        let centroid = sum / count;

        let mut deviation: Vector3<f64> = Vector3::zeros();
        for p in positions {
            deviation.x = deviation.x.max((p.x - centroid.x).abs());
            deviation.y = deviation.y.max((p.y - centroid.y).abs());
            deviation.z = deviation.z.max((p.z - centroid.z).abs());
        }

        let min = Point3::from(centroid - deviation);
        let max = Point3::from(centroid + deviation);
        Some(Self {
            min: clamp_non_negative(min),
            max: clamp_non_negative(max),
        })
    }

    /// Get the size (dimensions) of the box.
    ///
    /// # Example
    ///
    /// ```
    /// use scanvol_types::{BoundingBox, Point3};
    ///
    /// let positions = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(4.0, 6.0, 8.0),
    /// ];
    /// let bounds = BoundingBox::from_positions(&positions).unwrap();
    /// assert_eq!(bounds.size(), scanvol_types::Vector3::new(4.0, 6.0, 8.0));
    /// ```
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Check if the box contains a point.
    ///
    /// Points on the boundary are considered inside.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Check if the box has zero extent on any axis.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let s = self.size();
        s.x <= 0.0 || s.y <= 0.0 || s.z <= 0.0
    }
}

fn clamp_non_negative(p: Point3<f64>) -> Point3<f64> {
    Point3::new(p.x.max(0.0), p.y.max(0.0), p.z.max(0.0))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_positions_symmetric() {
        let positions = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 10.0, 10.0),
        ];
        let bounds = BoundingBox::from_positions(&positions).unwrap();
        assert_relative_eq!(bounds.min.x, 0.0);
        assert_relative_eq!(bounds.max.x, 10.0);
    }

    #[test]
    fn from_positions_asymmetric_is_not_tight() {
        // Centroid x = 4, deviation 8 (from the vertex at 12), so the box
        // would span [-4, 12] before clamping.
        let positions = [
            Point3::new(0.0, 5.0, 5.0),
            Point3::new(0.0, 5.0, 5.0),
            Point3::new(12.0, 5.0, 5.0),
        ];
        let bounds = BoundingBox::from_positions(&positions).unwrap();
        assert_relative_eq!(bounds.min.x, 0.0); // clamped from -4
        assert_relative_eq!(bounds.max.x, 12.0);
    }

    #[test]
    fn negative_components_clamp_to_zero() {
        // Centroid (0, 0, 0), deviation (5, 5, 5): both corners go negative
        // on min and stay positive on max.
        let positions = [
            Point3::new(-5.0, -5.0, -5.0),
            Point3::new(5.0, 5.0, 5.0),
        ];
        let bounds = BoundingBox::from_positions(&positions).unwrap();
        assert_relative_eq!(bounds.min.x, 0.0);
        assert_relative_eq!(bounds.min.y, 0.0);
        assert_relative_eq!(bounds.min.z, 0.0);
        assert_relative_eq!(bounds.max.x, 5.0);
    }

    #[test]
    fn fully_negative_mesh_clamps_both_corners() {
        let positions = [
            Point3::new(-10.0, -10.0, -10.0),
            Point3::new(-2.0, -2.0, -2.0),
        ];
        let bounds = BoundingBox::from_positions(&positions).unwrap();
        assert_relative_eq!(bounds.min.x, 0.0);
        assert_relative_eq!(bounds.max.x, 0.0);
    }

    #[test]
    fn empty_positions_yield_none() {
        assert!(BoundingBox::from_positions(&[]).is_none());
    }

    #[test]
    fn single_vertex_degenerate() {
        let bounds = BoundingBox::from_positions(&[Point3::new(10.0, 10.0, 10.0)]).unwrap();
        assert!(bounds.is_degenerate());
        assert!(bounds.contains(&Point3::new(10.0, 10.0, 10.0)));
    }

    #[test]
    fn contains_boundary() {
        let positions = [Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0)];
        let bounds = BoundingBox::from_positions(&positions).unwrap();
        assert!(bounds.contains(&Point3::new(0.0, 0.0, 0.0)));
        assert!(bounds.contains(&Point3::new(10.0, 10.0, 10.0)));
        assert!(!bounds.contains(&Point3::new(10.1, 5.0, 5.0)));
    }
}
