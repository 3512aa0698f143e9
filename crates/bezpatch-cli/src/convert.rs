//! Conversions between document types and evaluator types.

use bezpatch_core::{BezierPatch, ControlNet, CubicBezier, PatchError, PatchEvaluation};
use bezpatch_ir::{
    CurveDirection, CurveHandles, CurveSet, EvaluationReport, PatchDocument, Vec3 as IrVec3,
};
use bezpatch_math::{Point3, Vec3};

pub(crate) fn point_to_ir(p: &Point3) -> IrVec3 {
    IrVec3::new(p.x, p.y, p.z)
}

pub(crate) fn vec_to_ir(v: &Vec3) -> IrVec3 {
    IrVec3::new(v.x, v.y, v.z)
}

fn point_from_ir(v: &IrVec3) -> Point3 {
    Point3::new(v.x, v.y, v.z)
}

/// Build a control net from a document, rejecting anything but 16 points.
pub fn net_from_document(doc: &PatchDocument) -> Result<ControlNet, PatchError> {
    let points: Vec<Point3> = doc.control_points.iter().map(point_from_ir).collect();
    ControlNet::try_from(points)
}

/// A document holding `net`.
pub fn document_from_net(net: &ControlNet, name: Option<&str>) -> PatchDocument {
    let mut doc = PatchDocument::new(net.points().iter().map(point_to_ir).collect());
    doc.name = name.map(str::to_string);
    doc
}

/// Flatten an evaluation for serialization.
pub fn evaluation_report(patch: &BezierPatch, e: &PatchEvaluation) -> EvaluationReport {
    EvaluationReport {
        u: e.u,
        v: e.v,
        basis_u: e.basis_u.weights(),
        basis_v: e.basis_v.weights(),
        d_basis_u: e.d_basis_u.weights(),
        d_basis_v: e.d_basis_v.weights(),
        position: point_to_ir(&e.position),
        d_du: vec_to_ir(&e.d_du),
        d_dv: vec_to_ir(&e.d_dv),
        normal: e.normal().map(|n| vec_to_ir(&n)),
        control_points: patch.net.points().iter().map(point_to_ir).collect(),
    }
}

fn curve_handles(direction: CurveDirection, index: usize, c: &CubicBezier) -> CurveHandles {
    CurveHandles {
        direction,
        index,
        start: point_to_ir(&c.start),
        end: point_to_ir(&c.end),
        start_tangent: point_to_ir(&c.start_tangent),
        end_tangent: point_to_ir(&c.end_tangent),
    }
}

/// The eight net curves, labelled by direction.
pub fn curve_set(patch: &BezierPatch) -> CurveSet {
    let curves = patch
        .boundary_curves()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i < 4 {
                curve_handles(CurveDirection::U, i, c)
            } else {
                curve_handles(CurveDirection::V, i - 4, c)
            }
        })
        .collect();
    CurveSet { curves }
}
