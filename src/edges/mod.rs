//! Edge list parsing and validation.
//!
//! An edge list is plain text with one descriptor per line:
//!
//! ```text
//! X1,Y1 X2,Y2 COLOR
//! ```
//!
//! Fields are separated by single spaces, coordinates are zero-based grid
//! cell indices, and the color is an opaque token handed to the renderer.
//! This module handles:
//! - Validating a whole list and collecting every defect ([`validate`])
//! - Converting a validated list to pixel coordinates ([`parse`])

mod parser;
mod types;

pub use parser::{parse, parse_cells, required_size, validate};
pub use types::{
    ALERT_HEADER, Diagnostic, DiagnosticKind, ScaledEdge, ValidatedEdge, ValidationReport,
};
