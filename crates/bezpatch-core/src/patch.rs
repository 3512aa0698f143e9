//! Bicubic Bezier patch as a parametric surface.

use bezpatch_geom::{Surface, DEGENERATE_NORMAL};
use bezpatch_math::{Dir3, Point2, Point3, Transform, Vec3};

use crate::basis::{bernstein_basis, derivative_bernstein_basis, Basis4};
use crate::curve::{boundary_curves, CubicBezier};
use crate::net::ControlNet;
use crate::tensor::evaluate_tensor_product;

/// Everything computed while evaluating a patch at one `(u, v)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchEvaluation {
    /// Parameter in the column direction.
    pub u: f64,
    /// Parameter in the row direction.
    pub v: f64,
    /// `bernstein_basis(u)`.
    pub basis_u: Basis4,
    /// `bernstein_basis(v)`.
    pub basis_v: Basis4,
    /// `derivative_bernstein_basis(u)`.
    pub d_basis_u: Basis4,
    /// `derivative_bernstein_basis(v)`.
    pub d_basis_v: Basis4,
    /// Surface point p(u, v).
    pub position: Point3,
    /// ∂p/∂u.
    pub d_du: Vec3,
    /// ∂p/∂v.
    pub d_dv: Vec3,
}

impl PatchEvaluation {
    /// Unit normal `d_du × d_dv`, if the tangents are not parallel.
    pub fn normal(&self) -> Option<Dir3> {
        let n = self.d_du.cross(&self.d_dv);
        (n.norm() >= DEGENERATE_NORMAL).then(|| Dir3::new_normalize(n))
    }
}

/// A bicubic Bezier patch over `[0, 1] × [0, 1]`.
///
/// Parameters outside the unit square are not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierPatch {
    /// The control net, rows along v and columns along u.
    pub net: ControlNet,
}

impl BezierPatch {
    /// Wrap a control net.
    pub fn new(net: ControlNet) -> Self {
        Self { net }
    }

    /// Surface point at `(u, v)`.
    pub fn point(&self, u: f64, v: f64) -> Point3 {
        Point3::from(evaluate_tensor_product(
            &self.net,
            &bernstein_basis(v),
            &bernstein_basis(u),
        ))
    }

    /// Partial derivative ∂p/∂u at `(u, v)`.
    pub fn d_du(&self, u: f64, v: f64) -> Vec3 {
        evaluate_tensor_product(&self.net, &bernstein_basis(v), &derivative_bernstein_basis(u))
    }

    /// Partial derivative ∂p/∂v at `(u, v)`.
    pub fn d_dv(&self, u: f64, v: f64) -> Vec3 {
        evaluate_tensor_product(&self.net, &derivative_bernstein_basis(v), &bernstein_basis(u))
    }

    /// Position, both tangents and the bases behind them, sharing the four
    /// basis evaluations.
    pub fn evaluate(&self, u: f64, v: f64) -> PatchEvaluation {
        let basis_u = bernstein_basis(u);
        let basis_v = bernstein_basis(v);
        let d_basis_u = derivative_bernstein_basis(u);
        let d_basis_v = derivative_bernstein_basis(v);

        PatchEvaluation {
            u,
            v,
            basis_u,
            basis_v,
            d_basis_u,
            d_basis_v,
            position: Point3::from(evaluate_tensor_product(&self.net, &basis_v, &basis_u)),
            d_du: evaluate_tensor_product(&self.net, &basis_v, &d_basis_u),
            d_dv: evaluate_tensor_product(&self.net, &d_basis_v, &basis_u),
        }
    }

    /// The eight row and column curves of the net.
    pub fn boundary_curves(&self) -> [CubicBezier; 8] {
        boundary_curves(&self.net)
    }

    /// The patch with every control point transformed.
    ///
    /// Bezier patches are affine invariant, so this is the image of the
    /// original surface.
    pub fn transformed(&self, t: &Transform) -> Self {
        Self::new(self.net.transformed(t))
    }
}

impl From<ControlNet> for BezierPatch {
    fn from(net: ControlNet) -> Self {
        Self::new(net)
    }
}

impl Surface for BezierPatch {
    fn evaluate(&self, uv: Point2) -> Point3 {
        self.point(uv.x, uv.y)
    }

    fn d_du(&self, uv: Point2) -> Vec3 {
        BezierPatch::d_du(self, uv.x, uv.y)
    }

    fn d_dv(&self, uv: Point2) -> Vec3 {
        BezierPatch::d_dv(self, uv.x, uv.y)
    }

    fn domain(&self) -> ((f64, f64), (f64, f64)) {
        ((0.0, 1.0), (0.0, 1.0))
    }

    fn clone_box(&self) -> Box<dyn Surface> {
        Box::new(*self)
    }

    fn transform(&self, t: &Transform) -> Box<dyn Surface> {
        Box::new(self.transformed(t))
    }
}
