//! Cubic Bezier curves pulled out of a control net for drawing.

use bezpatch_geom::Curve3d;
use bezpatch_math::{Point3, Vec3};

use crate::basis::{bernstein_basis, derivative_bernstein_basis};
use crate::net::ControlNet;

/// Net indices of the eight drawable curves, in handle order
/// `[start, end, start_tangent, end_tangent]`.
///
/// The first four follow the rows (u direction), the last four the columns
/// (v direction). Entries 0, 3, 4 and 7 are the patch boundary.
pub const BOUNDARY_CURVE_INDICES: [[usize; 4]; 8] = [
    [0, 3, 1, 2],
    [4, 7, 5, 6],
    [8, 11, 9, 10],
    [12, 15, 13, 14],
    [0, 12, 4, 8],
    [1, 13, 5, 9],
    [2, 14, 6, 10],
    [3, 15, 7, 11],
];

/// A cubic Bezier curve stored the way curve-drawing handles take it: the
/// two endpoints first, then the two inner control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Point at `t = 0`.
    pub start: Point3,
    /// Point at `t = 1`.
    pub end: Point3,
    /// Control point pulling away from `start`.
    pub start_tangent: Point3,
    /// Control point pulling into `end`.
    pub end_tangent: Point3,
}

impl CubicBezier {
    /// Create a curve from its control polygon `p0, p1, p2, p3`.
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self {
            start: p0,
            end: p3,
            start_tangent: p1,
            end_tangent: p2,
        }
    }

    /// Points in handle order `[start, end, start_tangent, end_tangent]`.
    pub fn handles(&self) -> [Point3; 4] {
        [self.start, self.end, self.start_tangent, self.end_tangent]
    }

    /// Points in polygon order `[p0, p1, p2, p3]`.
    pub fn control_polygon(&self) -> [Point3; 4] {
        [self.start, self.start_tangent, self.end_tangent, self.end]
    }

    /// Point at `t`. Values outside `[0, 1]` extrapolate.
    pub fn eval(&self, t: f64) -> Point3 {
        Point3::from(bernstein_basis(t).combine(&self.control_polygon()))
    }

    /// First derivative at `t`.
    pub fn derivative(&self, t: f64) -> Vec3 {
        derivative_bernstein_basis(t).combine(&self.control_polygon())
    }
}

impl Curve3d for CubicBezier {
    fn evaluate(&self, t: f64) -> Point3 {
        self.eval(t)
    }

    fn tangent(&self, t: f64) -> Vec3 {
        self.derivative(t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn clone_box(&self) -> Box<dyn Curve3d> {
        Box::new(*self)
    }
}

/// The eight row and column curves of a net, ordered as in
/// [`BOUNDARY_CURVE_INDICES`].
pub fn boundary_curves(net: &ControlNet) -> [CubicBezier; 8] {
    BOUNDARY_CURVE_INDICES.map(|[start, end, start_tangent, end_tangent]| CubicBezier {
        start: net[start],
        end: net[end],
        start_tangent: net[start_tangent],
        end_tangent: net[end_tangent],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bezpatch_geom::central_tangent;

    fn net() -> ControlNet {
        ControlNet::from_fn(|row, col| {
            Point3::new(col as f64 * 10.0, (row * col) as f64, row as f64 * -4.0 + col as f64)
        })
    }

    #[test]
    fn test_first_curve_handle_order() {
        let n = net();
        let curves = boundary_curves(&n);
        assert_eq!(curves[0].handles(), [n[0], n[3], n[1], n[2]]);
    }

    #[test]
    fn test_all_curves_follow_index_table() {
        let n = net();
        for (curve, idx) in boundary_curves(&n).iter().zip(BOUNDARY_CURVE_INDICES) {
            assert_eq!(curve.handles(), idx.map(|i| n[i]));
        }
    }

    #[test]
    fn test_rows_and_columns() {
        let n = net();
        let curves = boundary_curves(&n);
        for r in 0..4 {
            assert_eq!(curves[r].control_polygon(), n.row(r));
        }
        for c in 0..4 {
            assert_eq!(curves[4 + c].control_polygon(), n.column(c));
        }
    }

    #[test]
    fn test_curve_interpolates_endpoints() {
        let curve = boundary_curves(&net())[5];
        assert_eq!(curve.eval(0.0), curve.start);
        assert_eq!(curve.eval(1.0), curve.end);
    }

    #[test]
    fn test_endpoint_derivatives_point_at_handles() {
        let curve = boundary_curves(&net())[1];
        assert_relative_eq!(
            curve.derivative(0.0),
            (curve.start_tangent - curve.start) * 3.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            curve.derivative(1.0),
            (curve.end - curve.end_tangent) * 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_tangent_matches_finite_difference() {
        let curve = CubicBezier::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 3.0, 0.0),
            Point3::new(4.0, -2.0, 1.0),
            Point3::new(5.0, 0.0, 2.0),
        );
        for t in [0.0, 0.2, 0.5, 0.9, 1.0] {
            assert_relative_eq!(
                central_tangent(&curve, t, 1e-5),
                Curve3d::tangent(&curve, t),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_new_maps_polygon_to_handles() {
        let [a, b, c, d] = net().row(2);
        let curve = CubicBezier::new(a, b, c, d);
        assert_eq!(curve.handles(), [a, d, b, c]);
    }
}
