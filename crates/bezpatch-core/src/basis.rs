//! Cubic Bernstein basis and its derivative.
//!
//! Neither function validates `t`. Outside `[0, 1]` the polynomials are
//! simply extrapolated, which is what exploratory evaluation past a patch
//! edge relies on.

use std::ops::Index;

use bezpatch_math::{Point3, Vec3};

/// Four scalar weights, one per cubic basis function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis4(pub [f64; 4]);

impl Basis4 {
    /// The weights as an array.
    pub fn weights(&self) -> [f64; 4] {
        self.0
    }

    /// Sum of the four weights.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Weighted sum `Σ w[i] · p[i]` of four points, as a position vector.
    pub fn combine(&self, points: &[Point3; 4]) -> Vec3 {
        self.0
            .iter()
            .zip(points)
            .fold(Vec3::zeros(), |acc, (w, p)| acc + p.coords * *w)
    }
}

impl Index<usize> for Basis4 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl From<[f64; 4]> for Basis4 {
    fn from(w: [f64; 4]) -> Self {
        Self(w)
    }
}

/// The four cubic Bernstein polynomials at `t`.
///
/// `B0 = (1-t)³`, `B1 = 3t(1-t)²`, `B2 = 3t²(1-t)`, `B3 = t³`.
pub fn bernstein_basis(t: f64) -> Basis4 {
    let s = 1.0 - t;
    Basis4([s * s * s, 3.0 * t * s * s, 3.0 * t * t * s, t * t * t])
}

/// First derivatives of the cubic Bernstein polynomials at `t`.
pub fn derivative_bernstein_basis(t: f64) -> Basis4 {
    let s = 1.0 - t;
    Basis4([
        -3.0 * s * s,
        3.0 * s * s - 6.0 * t * s,
        6.0 * t * s - 3.0 * t * t,
        3.0 * t * t,
    ])
}
