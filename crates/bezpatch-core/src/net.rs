//! The 4×4 control net of a bicubic patch.

use std::ops::Index;

use bezpatch_math::{Point3, Transform};

use crate::error::{PatchError, Result};

/// Number of control points in a bicubic net.
pub const NET_SIZE: usize = 16;

/// Sixteen control points in row-major order.
///
/// Index `i` sits at row `i / 4` and column `i % 4`. Columns run along u and
/// rows along v, so `net[0]`, `net[3]`, `net[12]` and `net[15]` are the
/// patch corners at `(u, v)` = (0,0), (1,0), (0,1) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlNet {
    points: [Point3; NET_SIZE],
}

impl ControlNet {
    /// Create a net from exactly sixteen points.
    pub fn new(points: [Point3; NET_SIZE]) -> Self {
        Self { points }
    }

    /// Create a net from a slice.
    ///
    /// # Panics
    /// Panics if the slice does not hold exactly sixteen points. Use
    /// `ControlNet::try_from` for input that has not been checked.
    pub fn from_slice(points: &[Point3]) -> Self {
        assert!(
            points.len() == NET_SIZE,
            "control net needs {} points, got {}",
            NET_SIZE,
            points.len()
        );
        let mut arr = [Point3::origin(); NET_SIZE];
        arr.copy_from_slice(points);
        Self { points: arr }
    }

    /// Build a net from `f(row, col)`.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Point3) -> Self {
        Self {
            points: std::array::from_fn(|i| f(i / 4, i % 4)),
        }
    }

    /// The wavy sample patch used when no document is supplied.
    ///
    /// Row 0 sits at z = +15 and row 3 at z = -15, with one raised interior
    /// point at index 6.
    pub fn demo() -> Self {
        Self::new([
            // Row 0
            Point3::new(-10.0, -10.0, 15.0),
            Point3::new(-5.0, 0.0, 15.0),
            Point3::new(5.0, 0.0, 15.0),
            Point3::new(10.0, 0.0, 15.0),
            // Row 1
            Point3::new(-15.0, 0.0, 5.0),
            Point3::new(-5.0, 0.0, 5.0),
            Point3::new(5.0, 20.0, 5.0),
            Point3::new(15.0, 0.0, 5.0),
            // Row 2
            Point3::new(-15.0, 0.0, -5.0),
            Point3::new(-5.0, 0.0, -5.0),
            Point3::new(5.0, 0.0, -5.0),
            Point3::new(15.0, 0.0, -5.0),
            // Row 3
            Point3::new(-10.0, 10.0, -15.0),
            Point3::new(-5.0, 0.0, -15.0),
            Point3::new(5.0, 0.0, -15.0),
            Point3::new(25.0, 10.0, -15.0),
        ])
    }

    /// All sixteen points in row-major order.
    pub fn points(&self) -> &[Point3; NET_SIZE] {
        &self.points
    }

    /// Point at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below 4.
    pub fn get(&self, row: usize, col: usize) -> Point3 {
        assert!(row < 4 && col < 4, "net index ({row}, {col}) out of range");
        self.points[row * 4 + col]
    }

    /// The four points of row `r`, ordered by column.
    pub fn row(&self, r: usize) -> [Point3; 4] {
        std::array::from_fn(|c| self.get(r, c))
    }

    /// The four points of column `c`, ordered by row.
    pub fn column(&self, c: usize) -> [Point3; 4] {
        std::array::from_fn(|r| self.get(r, c))
    }

    /// Apply `f` to every point.
    pub fn map(&self, f: impl FnMut(Point3) -> Point3) -> Self {
        Self {
            points: self.points.map(f),
        }
    }

    /// Transform every control point.
    pub fn transformed(&self, t: &Transform) -> Self {
        self.map(|p| t.apply_point(&p))
    }
}

impl Index<usize> for ControlNet {
    type Output = Point3;

    fn index(&self, i: usize) -> &Point3 {
        &self.points[i]
    }
}

impl From<[Point3; NET_SIZE]> for ControlNet {
    fn from(points: [Point3; NET_SIZE]) -> Self {
        Self::new(points)
    }
}

impl TryFrom<&[Point3]> for ControlNet {
    type Error = PatchError;

    fn try_from(points: &[Point3]) -> Result<Self> {
        if points.len() != NET_SIZE {
            return Err(PatchError::ControlNetLength {
                expected: NET_SIZE,
                found: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.coords.iter().all(|c| c.is_finite())) {
            return Err(PatchError::NonFiniteControlPoint { index });
        }
        Ok(Self::from_slice(points))
    }
}

impl TryFrom<Vec<Point3>> for ControlNet {
    type Error = PatchError;

    fn try_from(points: Vec<Point3>) -> Result<Self> {
        Self::try_from(points.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezpatch_math::Vec3;

    fn grid() -> ControlNet {
        ControlNet::from_fn(|row, col| Point3::new(col as f64, 0.0, row as f64))
    }

    #[test]
    fn test_row_major_layout() {
        let net = grid();
        assert_eq!(net[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(net[3], Point3::new(3.0, 0.0, 0.0));
        assert_eq!(net[12], Point3::new(0.0, 0.0, 3.0));
        assert_eq!(net[6], Point3::new(2.0, 0.0, 1.0));
        assert_eq!(net.get(1, 2), net[6]);
    }

    #[test]
    fn test_row_and_column() {
        let net = grid();
        assert_eq!(net.row(2), [net[8], net[9], net[10], net[11]]);
        assert_eq!(net.column(1), [net[1], net[5], net[9], net[13]]);
    }

    #[test]
    fn test_try_from_rejects_wrong_length() {
        let pts = vec![Point3::origin(); 15];
        let err = ControlNet::try_from(pts).unwrap_err();
        assert_eq!(
            err,
            PatchError::ControlNetLength {
                expected: 16,
                found: 15
            }
        );
        assert_eq!(err.to_string(), "control net needs 16 points, got 15");
    }

    #[test]
    fn test_try_from_accepts_sixteen() {
        let pts: Vec<_> = grid().points().to_vec();
        let net = ControlNet::try_from(pts).unwrap();
        assert_eq!(net, grid());
    }

    #[test]
    fn test_try_from_rejects_non_finite() {
        let mut pts: Vec<_> = grid().points().to_vec();
        pts[5].y = f64::NAN;
        assert_eq!(
            ControlNet::try_from(pts.clone()).unwrap_err(),
            PatchError::NonFiniteControlPoint { index: 5 }
        );

        pts[5].y = 0.0;
        pts[11].z = f64::INFINITY;
        let err = ControlNet::try_from(pts).unwrap_err();
        assert_eq!(err.to_string(), "control point 11 is not finite");
    }

    #[test]
    #[should_panic(expected = "control net needs 16 points, got 17")]
    fn test_from_slice_fails_fast() {
        let pts = [Point3::origin(); 17];
        let _ = ControlNet::from_slice(&pts);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range() {
        let _ = grid().get(4, 0);
    }

    #[test]
    fn test_transformed() {
        let t = Transform::translation(Vec3::new(0.0, 5.0, 0.0));
        let moved = grid().transformed(&t);
        for (a, b) in grid().points().iter().zip(moved.points()) {
            assert_eq!(b - a, Vec3::new(0.0, 5.0, 0.0));
        }
        assert_eq!(grid().transformed(&Transform::default()), grid());
    }

    #[test]
    fn test_demo_corners() {
        let net = ControlNet::demo();
        assert_eq!(net[0], Point3::new(-10.0, -10.0, 15.0));
        assert_eq!(net[15], Point3::new(25.0, 10.0, -15.0));
        assert_eq!(net[6].y, 20.0);
    }
}
