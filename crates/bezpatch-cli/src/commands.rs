//! Subcommand implementations.
//!
//! Each function returns the text to print so the binary stays a thin
//! argument parser and the behavior can be tested without a process.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{bail, Context, Result};
use bezpatch_core::{BezierPatch, ControlNet};
use bezpatch_geom::{central_d_du, central_d_dv};
use bezpatch_ir::{EvaluationReport, PatchDocument, Vec3 as IrVec3};
use bezpatch_math::{Point2, Tolerance};
use log::{debug, info, warn};

use crate::convert::{curve_set, document_from_net, evaluation_report, net_from_document};

/// Parameter used when neither the command line nor the document gives one.
pub const DEFAULT_PARAMETER: f64 = 0.5;

/// Name given to the built-in net.
pub const DEMO_NAME: &str = "demo";

/// Load `path`, or the built-in demo net when no path is given.
pub fn load_document(path: Option<&Path>) -> Result<PatchDocument> {
    match path {
        Some(p) => {
            PatchDocument::load(p).with_context(|| format!("failed to read {}", p.display()))
        }
        None => {
            debug!("no document given, using the demo net");
            Ok(document_from_net(&ControlNet::demo(), Some(DEMO_NAME)))
        }
    }
}

/// The patch described by a document.
pub fn patch_from_document(doc: &PatchDocument) -> Result<BezierPatch> {
    let net = net_from_document(doc).context("document does not describe a bicubic patch")?;
    Ok(BezierPatch::new(net))
}

/// Command-line value, then document value, then [`DEFAULT_PARAMETER`].
pub fn resolve_parameter(flag: Option<f64>, document: Option<f64>) -> f64 {
    flag.or(document).unwrap_or(DEFAULT_PARAMETER)
}

/// Evaluate a document at `(u, v)`.
pub fn evaluate(doc: &PatchDocument, u: Option<f64>, v: Option<f64>) -> Result<EvaluationReport> {
    let patch = patch_from_document(doc)?;
    let u = resolve_parameter(u, doc.u);
    let v = resolve_parameter(v, doc.v);
    if !u.is_finite() || !v.is_finite() {
        bail!("parameters must be finite, got u={u}, v={v}");
    }
    for (name, t) in [("u", u), ("v", v)] {
        if !(0.0..=1.0).contains(&t) {
            warn!("{name}={t} is outside [0, 1], extrapolating");
        }
    }

    let e = patch.evaluate(u, v);
    info!("evaluated patch at u={u}, v={v}");
    Ok(evaluation_report(&patch, &e))
}

fn fmt_vec(v: &IrVec3) -> String {
    format!("({:.6}, {:.6}, {:.6})", v.x, v.y, v.z)
}

fn fmt_weights(w: &[f64; 4]) -> String {
    format!("({:.6}, {:.6}, {:.6}, {:.6})", w[0], w[1], w[2], w[3])
}

/// Human-readable rendering of a report.
pub fn format_report(r: &EvaluationReport) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "u: {}  v: {}", r.u, r.v)?;
    writeln!(out, "basis_u:   {}", fmt_weights(&r.basis_u))?;
    writeln!(out, "basis_v:   {}", fmt_weights(&r.basis_v))?;
    writeln!(out, "d_basis_u: {}", fmt_weights(&r.d_basis_u))?;
    writeln!(out, "d_basis_v: {}", fmt_weights(&r.d_basis_v))?;
    writeln!(out, "p:     {}", fmt_vec(&r.position))?;
    writeln!(out, "dp/du: {}", fmt_vec(&r.d_du))?;
    writeln!(out, "dp/dv: {}", fmt_vec(&r.d_dv))?;
    match &r.normal {
        Some(n) => writeln!(out, "n:     {}", fmt_vec(n))?,
        None => writeln!(out, "n:     undefined (parallel tangents)")?,
    }
    Ok(out)
}

/// The eight net curves as pretty JSON.
pub fn curves_json(doc: &PatchDocument) -> Result<String> {
    let patch = patch_from_document(doc)?;
    Ok(serde_json::to_string_pretty(&curve_set(&patch))?)
}

/// Worst disagreement between analytic and finite-difference tangents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentCheck {
    /// Number of `(u, v)` samples taken.
    pub samples: usize,
    /// Largest scaled error in ∂p/∂u.
    pub max_du_error: f64,
    /// Largest scaled error in ∂p/∂v.
    pub max_dv_error: f64,
    /// Where the largest error of either kind occurred.
    pub worst: (f64, f64),
}

impl TangentCheck {
    /// The larger of the two errors.
    pub fn max_error(&self) -> f64 {
        self.max_du_error.max(self.max_dv_error)
    }
}

/// Compare analytic tangents against central differences with step `h` on
/// an `n × n` grid over the unit square.
///
/// Errors are scaled by `max(1, |analytic|)`.
pub fn check_tangents(patch: &BezierPatch, n: usize, h: f64) -> Result<TangentCheck> {
    if n < 2 {
        bail!("need at least 2 samples per direction, got {n}");
    }
    if !(h > 0.0 && h.is_finite()) {
        bail!("finite-difference step must be positive, got {h}");
    }

    let Some(samples) = n.checked_mul(n) else {
        bail!("{n} samples per direction is too many");
    };

    let mut check = TangentCheck {
        samples,
        max_du_error: 0.0,
        max_dv_error: 0.0,
        worst: (0.0, 0.0),
    };
    let step = 1.0 / (n - 1) as f64;
    for i in 0..n {
        for j in 0..n {
            let uv = Point2::new(i as f64 * step, j as f64 * step);
            let du = patch.d_du(uv.x, uv.y);
            let dv = patch.d_dv(uv.x, uv.y);
            let e_du = (central_d_du(patch, uv, h) - du).norm() / du.norm().max(1.0);
            let e_dv = (central_d_dv(patch, uv, h) - dv).norm() / dv.norm().max(1.0);
            if !e_du.is_finite() || !e_dv.is_finite() {
                bail!("tangents are not finite at u={}, v={}", uv.x, uv.y);
            }

            if e_du.max(e_dv) > check.max_error() {
                check.worst = (uv.x, uv.y);
            }
            check.max_du_error = check.max_du_error.max(e_du);
            check.max_dv_error = check.max_dv_error.max(e_dv);
        }
    }
    debug!(
        "tangent check: {} samples, max du error {:.3e}, max dv error {:.3e}",
        check.samples, check.max_du_error, check.max_dv_error
    );
    Ok(check)
}

/// Run [`check_tangents`] and fail if the error exceeds `tolerance`.
pub fn check(doc: &PatchDocument, n: usize, h: f64, tolerance: f64) -> Result<String> {
    let patch = patch_from_document(doc)?;
    let c = check_tangents(&patch, n, h)?;
    let tol = Tolerance { linear: tolerance };
    if !tol.is_zero(c.max_error()) {
        bail!(
            "tangent mismatch {:.3e} exceeds tolerance {:.3e} at u={}, v={}",
            c.max_error(),
            tolerance,
            c.worst.0,
            c.worst.1
        );
    }
    Ok(format!(
        "ok: {} samples, max du error {:.3e}, max dv error {:.3e}\n",
        c.samples, c.max_du_error, c.max_dv_error
    ))
}

/// Summary of a document.
pub fn info(doc: &PatchDocument) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "name: {}", doc.name.as_deref().unwrap_or("(unnamed)"))?;
    writeln!(out, "version: {}", doc.version)?;
    writeln!(out, "control points: {}", doc.control_points.len())?;
    if let (Some(u), Some(v)) = (doc.u, doc.v) {
        writeln!(out, "default parameters: u={u}, v={v}")?;
    }

    match net_from_document(doc) {
        Ok(net) => {
            let (lo, hi) = net.points().iter().fold(
                (net[0].coords, net[0].coords),
                |(lo, hi), p| (lo.inf(&p.coords), hi.sup(&p.coords)),
            );
            writeln!(
                out,
                "bounds: ({}, {}, {}) .. ({}, {}, {})",
                lo.x, lo.y, lo.z, hi.x, hi.y, hi.z
            )?;
        }
        Err(e) => writeln!(out, "invalid: {e}")?,
    }
    Ok(out)
}

/// The demo net as a pretty JSON document.
pub fn template() -> Result<String> {
    Ok(document_from_net(&ControlNet::demo(), Some(DEMO_NAME)).to_json()?)
}
