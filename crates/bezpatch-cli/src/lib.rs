//! Library side of the `bezpatch` command line.
//!
//! Loads patch documents, evaluates them and renders the results as text or
//! JSON for an external renderer.

pub mod commands;
pub mod convert;

pub use commands::{check_tangents, evaluate, format_report, load_document, TangentCheck};
pub use convert::{curve_set, document_from_net, evaluation_report, net_from_document};
