#![warn(missing_docs)]

//! Document and report formats for bezpatch.
//!
//! A [`PatchDocument`] stores a control net the way a scene or config file
//! would: a flat, row-major list of points plus optional default
//! parameters. Reports ([`EvaluationReport`], [`CurveSet`]) are what the
//! command line hands to an external renderer.
//!
//! This crate only describes data. Checking that a document holds a usable
//! net and evaluating it happen in `bezpatch-core`.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current document format version.
pub const FORMAT_VERSION: &str = "0.1";

/// Errors raised while reading or writing documents.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    /// Malformed TOML.
    #[error("invalid TOML document: {0}")]
    Toml(#[from] toml::de::Error),
    /// The file extension names no supported format.
    #[error("unsupported document format: {0:?} (expected .json or .toml)")]
    UnsupportedFormat(String),
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

/// 3D vector with f64 components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new Vec3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A bicubic patch document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchDocument {
    /// Format version string (e.g. "0.1").
    pub version: String,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Control points in row-major order; a usable net has 16.
    pub control_points: Vec<Vec3>,
    /// Default u parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u: Option<f64>,
    /// Default v parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<f64>,
}

impl Default for PatchDocument {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            name: None,
            control_points: Vec::new(),
            u: None,
            v: None,
        }
    }
}

impl PatchDocument {
    /// Create a document holding `control_points`.
    pub fn new(control_points: Vec<Vec3>) -> Self {
        Self {
            control_points,
            ..Self::default()
        }
    }

    /// Serialize to a pretty JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserialize from a TOML string.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read a document, picking the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        let text = std::fs::read_to_string(path)?;
        let doc = match ext.as_str() {
            "json" => Self::from_json(&text)?,
            "toml" => Self::from_toml(&text)?,
            _ => return Err(DocumentError::UnsupportedFormat(ext)),
        };
        debug!(
            "loaded {} (version {}, {} control points)",
            path.display(),
            doc.version,
            doc.control_points.len()
        );
        Ok(doc)
    }

    /// Write the document as pretty JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}

/// Result of evaluating a patch at one parameter pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// u parameter.
    pub u: f64,
    /// v parameter.
    pub v: f64,
    /// Bernstein weights at u.
    pub basis_u: [f64; 4],
    /// Bernstein weights at v.
    pub basis_v: [f64; 4],
    /// Derivative weights at u.
    pub d_basis_u: [f64; 4],
    /// Derivative weights at v.
    pub d_basis_v: [f64; 4],
    /// Surface point.
    pub position: Vec3,
    /// ∂p/∂u.
    pub d_du: Vec3,
    /// ∂p/∂v.
    pub d_dv: Vec3,
    /// Unit normal, absent where the tangents are parallel.
    pub normal: Option<Vec3>,
    /// The evaluated control net, row-major.
    pub control_points: Vec<Vec3>,
}

/// Parametric direction a net curve runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveDirection {
    /// Along a row.
    U,
    /// Along a column.
    V,
}

/// One cubic curve in handle order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveHandles {
    /// Direction the curve runs along.
    pub direction: CurveDirection,
    /// Row (for `u`) or column (for `v`) index.
    pub index: usize,
    /// Point at t = 0.
    pub start: Vec3,
    /// Point at t = 1.
    pub end: Vec3,
    /// Control point next to `start`.
    pub start_tangent: Vec3,
    /// Control point next to `end`.
    pub end_tangent: Vec3,
}

/// The eight row and column curves of a net.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurveSet {
    /// Curves in extraction order: four rows, then four columns.
    pub curves: Vec<CurveHandles>,
}
