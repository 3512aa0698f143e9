//! Tensor-product weighted sum over a control net.

use bezpatch_math::Vec3;

use crate::basis::Basis4;
use crate::net::ControlNet;

/// Combine a control net with two weight vectors.
///
/// `inner` weights the four points along each row (the u direction) and
/// `outer` weights the four row sums (the v direction):
///
/// `Σ_r outer[r] · Σ_c inner[c] · net[4r + c]`
///
/// Which quantity comes out depends only on the weights passed in:
///
/// | result  | `outer`                        | `inner`                        |
/// |---------|--------------------------------|--------------------------------|
/// | p(u,v)  | `bernstein_basis(v)`           | `bernstein_basis(u)`           |
/// | ∂p/∂u   | `bernstein_basis(v)`           | `derivative_bernstein_basis(u)`|
/// | ∂p/∂v   | `derivative_bernstein_basis(v)`| `bernstein_basis(u)`           |
///
/// The result is a plain vector; for positions it is the coordinate vector
/// of the surface point.
pub fn evaluate_tensor_product(net: &ControlNet, outer: &Basis4, inner: &Basis4) -> Vec3 {
    (0..4).fold(Vec3::zeros(), |acc, r| {
        acc + inner.combine(&net.row(r)) * outer[r]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::{bernstein_basis, derivative_bernstein_basis};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use bezpatch_math::{Point3, Transform};

    fn grid() -> ControlNet {
        ControlNet::from_fn(|row, col| Point3::new(col as f64, 0.0, row as f64))
    }

    fn bumpy() -> ControlNet {
        ControlNet::from_fn(|row, col| {
            let (r, c) = (row as f64, col as f64);
            Point3::new(c * 2.0 + r * 0.3, (r * c).sin() * 4.0, r * 1.5 - c * c * 0.2)
        })
    }

    fn position(net: &ControlNet, u: f64, v: f64) -> Vec3 {
        evaluate_tensor_product(net, &bernstein_basis(v), &bernstein_basis(u))
    }

    #[test]
    fn test_corner_interpolation() {
        let net = bumpy();
        assert_eq!(position(&net, 0.0, 0.0), net[0].coords);
        assert_eq!(position(&net, 1.0, 0.0), net[3].coords);
        assert_eq!(position(&net, 0.0, 1.0), net[12].coords);
        assert_eq!(position(&net, 1.0, 1.0), net[15].coords);
    }

    #[test]
    fn test_identity_grid_midpoint() {
        // Weights (0.125, 0.375, 0.375, 0.125) against columns 0..3 give
        // 0.375 + 0.75 + 0.375 = 1.5 in each direction.
        let p = position(&grid(), 0.5, 0.5);
        assert_relative_eq!(p, Vec3::new(1.5, 0.0, 1.5), epsilon = 1e-12);
    }

    #[test]
    fn test_identity_grid_is_linear_in_parameters() {
        // Evenly spaced control points reproduce (3u, 0, 3v).
        let net = grid();
        for (u, v) in [(0.1, 0.9), (0.25, 0.75), (0.6, 0.3)] {
            let p = position(&net, u, v);
            assert_relative_eq!(p, Vec3::new(3.0 * u, 0.0, 3.0 * v), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_identity_grid_tangents() {
        let net = grid();
        let (u, v) = (0.3, 0.8);
        let d_du = evaluate_tensor_product(&net, &bernstein_basis(v), &derivative_bernstein_basis(u));
        let d_dv = evaluate_tensor_product(&net, &derivative_bernstein_basis(v), &bernstein_basis(u));
        assert_relative_eq!(d_du, Vec3::new(3.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(d_dv, Vec3::new(0.0, 0.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_argument_roles_are_not_symmetric() {
        // Swapping outer and inner transposes the net.
        let net = bumpy();
        let (a, b) = (bernstein_basis(0.2), bernstein_basis(0.7));
        let transposed = ControlNet::from_fn(|row, col| net.get(col, row));
        assert_relative_eq!(
            evaluate_tensor_product(&net, &a, &b),
            evaluate_tensor_product(&transposed, &b, &a),
            epsilon = 1e-12
        );
        assert!(
            (evaluate_tensor_product(&net, &a, &b) - evaluate_tensor_product(&net, &b, &a)).norm()
                > 1e-3
        );
    }

    #[test]
    fn test_scaling_net_scales_result() {
        let net = bumpy();
        let k = 2.5;
        let scaled = net.transformed(&Transform::uniform_scale(k));
        let (outer, inner) = (bernstein_basis(0.4), derivative_bernstein_basis(0.65));
        assert_relative_eq!(
            evaluate_tensor_product(&scaled, &outer, &inner),
            evaluate_tensor_product(&net, &outer, &inner) * k,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_translating_net_translates_positions_only() {
        let net = bumpy();
        let d = Vec3::new(-3.0, 7.0, 0.5);
        let moved = net.transformed(&Transform::translation(d));
        let (u, v) = (0.35, 0.55);

        assert_relative_eq!(position(&moved, u, v), position(&net, u, v) + d, epsilon = 1e-10);

        // Derivative weights sum to zero, so tangents ignore translation.
        let outer = bernstein_basis(v);
        let inner = derivative_bernstein_basis(u);
        assert_relative_eq!(
            evaluate_tensor_product(&moved, &outer, &inner),
            evaluate_tensor_product(&net, &outer, &inner),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_zero_weights_give_zero() {
        let zero = Basis4([0.0; 4]);
        let v = evaluate_tensor_product(&bumpy(), &zero, &bernstein_basis(0.5));
        assert_abs_diff_eq!(v, Vec3::zeros(), epsilon = 1e-15);
    }

    #[test]
    fn test_single_weight_selects_point() {
        let net = bumpy();
        let outer = Basis4([0.0, 0.0, 1.0, 0.0]);
        let inner = Basis4([0.0, 1.0, 0.0, 0.0]);
        assert_eq!(evaluate_tensor_product(&net, &outer, &inner), net[9].coords);
    }
}
