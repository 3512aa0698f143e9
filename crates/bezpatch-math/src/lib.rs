#![warn(missing_docs)]

//! Math types for the bezpatch evaluator.
//!
//! Thin aliases over nalgebra for the points and vectors a control net is
//! made of, an affine [`Transform`] for moving whole nets, and the
//! [`Tolerance`] the tangent check compares errors against.

use nalgebra::{Matrix4, Unit, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A point in the `(u, v)` parameter plane.
pub type Point2 = nalgebra::Point2<f64>;

/// A 4-component vector (homogeneous coordinates or a basis tuple).
pub type Vec4 = Vector4<f64>;

/// Drop the fourth component of a 4-vector.
///
/// The `w` component is ignored, not divided through.
pub fn xyz(v: &Vec4) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `d`.
    pub fn translation(d: Vec3) -> Self {
        Self {
            matrix: Matrix4::new_translation(&d),
        }
    }

    /// Uniform scale by `k` about the origin.
    pub fn uniform_scale(k: f64) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&Vec3::repeat(k)),
        }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Compose: `self * other`, so `other` is applied first.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        Point3::from(xyz(&(self.matrix * p.to_homogeneous())))
    }

    /// Transform a displacement vector (translation is ignored).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        xyz(&(self.matrix * v.to_homogeneous()))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Absolute tolerance on scaled errors.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Largest magnitude still treated as zero.
    pub linear: f64,
}

impl Tolerance {
    /// Check if a scalar is effectively zero.
    ///
    /// NaN is never zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}
