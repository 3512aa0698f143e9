#![warn(missing_docs)]

//! Parametric surface and curve abstractions for bezpatch.
//!
//! The [`Surface`] and [`Curve3d`] traits are what a renderer or checker
//! consumes; the finite-difference helpers give an independent estimate of
//! the analytic derivatives a surface reports.

use bezpatch_math::{Dir3, Point2, Point3, Transform, Vec3};

/// Below this length `d_du × d_dv` is treated as having no direction.
pub const DEGENERATE_NORMAL: f64 = 1e-15;

// =============================================================================
// Surfaces
// =============================================================================

/// A parametric surface in 3D space.
pub trait Surface: Send + Sync + std::fmt::Debug {
    /// Evaluate the surface at parameter `(u, v)` to get a 3D point.
    fn evaluate(&self, uv: Point2) -> Point3;

    /// Partial derivative with respect to u at `(u, v)`.
    fn d_du(&self, uv: Point2) -> Vec3;

    /// Partial derivative with respect to v at `(u, v)`.
    fn d_dv(&self, uv: Point2) -> Vec3;

    /// Unit normal `d_du × d_dv`, or `None` where the tangents are parallel.
    fn try_normal(&self, uv: Point2) -> Option<Dir3> {
        let n = self.d_du(uv).cross(&self.d_dv(uv));
        if n.norm() < DEGENERATE_NORMAL {
            None
        } else {
            Some(Dir3::new_normalize(n))
        }
    }

    /// Unit normal at `(u, v)`, falling back to +Z where it is undefined.
    fn normal(&self, uv: Point2) -> Dir3 {
        self.try_normal(uv)
            .unwrap_or_else(|| Dir3::new_normalize(Vec3::z()))
    }

    /// Parameter domain as `((u_min, u_max), (v_min, v_max))`.
    fn domain(&self) -> ((f64, f64), (f64, f64));

    /// Clone this surface into a boxed trait object.
    fn clone_box(&self) -> Box<dyn Surface>;

    /// Apply an affine transform to this surface, returning a new surface.
    fn transform(&self, t: &Transform) -> Box<dyn Surface>;
}

impl Clone for Box<dyn Surface> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// =============================================================================
// Curves
// =============================================================================

/// A parametric curve in 3D space.
pub trait Curve3d: Send + Sync + std::fmt::Debug {
    /// Evaluate the curve at parameter `t` to get a 3D point.
    fn evaluate(&self, t: f64) -> Point3;

    /// Tangent vector (first derivative) at parameter `t`.
    fn tangent(&self, t: f64) -> Vec3;

    /// Parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Clone into a boxed trait object.
    fn clone_box(&self) -> Box<dyn Curve3d>;
}

impl Clone for Box<dyn Curve3d> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// =============================================================================
// Finite differences
// =============================================================================

/// Central-difference estimate of `∂S/∂u` with step `h`.
///
/// Samples at `u ± h` without clamping to the domain, so `h` may reach past
/// the patch edge.
pub fn central_d_du(surface: &dyn Surface, uv: Point2, h: f64) -> Vec3 {
    let p0 = surface.evaluate(Point2::new(uv.x - h, uv.y));
    let p1 = surface.evaluate(Point2::new(uv.x + h, uv.y));
    (p1 - p0) / (2.0 * h)
}

/// Central-difference estimate of `∂S/∂v` with step `h`.
pub fn central_d_dv(surface: &dyn Surface, uv: Point2, h: f64) -> Vec3 {
    let p0 = surface.evaluate(Point2::new(uv.x, uv.y - h));
    let p1 = surface.evaluate(Point2::new(uv.x, uv.y + h));
    (p1 - p0) / (2.0 * h)
}

/// Central-difference estimate of a curve tangent with step `h`.
pub fn central_tangent(curve: &dyn Curve3d, t: f64, h: f64) -> Vec3 {
    (curve.evaluate(t + h) - curve.evaluate(t - h)) / (2.0 * h)
}
