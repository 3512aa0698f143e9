#![warn(missing_docs)]

//! Bicubic Bezier patch evaluation.
//!
//! A patch is a 4×4 [`ControlNet`] combined with two cubic Bernstein bases,
//! one per parametric direction. Everything here is a pure function of its
//! inputs; no state is kept between calls.
//!
//! # Key types
//!
//! - [`Basis4`] — four basis weights for one parameter
//! - [`ControlNet`] — sixteen control points, row-major
//! - [`BezierPatch`] — a net viewed as a [`bezpatch_geom::Surface`]
//! - [`CubicBezier`] — a row or column curve handed to a renderer
//!
//! # Example
//!
//! ```
//! use bezpatch_core::{
//!     bernstein_basis, derivative_bernstein_basis, evaluate_tensor_product, ControlNet,
//! };
//!
//! let net = ControlNet::demo();
//! let (u, v) = (0.25, 0.5);
//! let p = evaluate_tensor_product(&net, &bernstein_basis(v), &bernstein_basis(u));
//! let dp_du = evaluate_tensor_product(&net, &bernstein_basis(v), &derivative_bernstein_basis(u));
//! let dp_dv = evaluate_tensor_product(&net, &derivative_bernstein_basis(v), &bernstein_basis(u));
//! # let _ = (p, dp_du, dp_dv);
//! ```

pub mod basis;
pub mod curve;
pub mod error;
pub mod net;
pub mod patch;
pub mod tensor;

pub use basis::{bernstein_basis, derivative_bernstein_basis, Basis4};
pub use curve::{boundary_curves, CubicBezier, BOUNDARY_CURVE_INDICES};
pub use error::{PatchError, Result};
pub use net::{ControlNet, NET_SIZE};
pub use patch::{BezierPatch, PatchEvaluation};
pub use tensor::evaluate_tensor_product;
