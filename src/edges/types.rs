//! Edge and diagnostic types.

use serde::Serialize;
use thiserror::Error;

/// Header shown above the diagnostics of a rejected edge list.
pub const ALERT_HEADER: &str = "There was an error with some of your line input.\n\
For reference, the correct form for each line is: x1,y1 x2,y2 color";

/// An edge in grid-cell coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedEdge {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
    /// Color token, forwarded verbatim to the renderer.
    pub color: String,
}

impl ValidatedEdge {
    /// Map both endpoints to pixel coordinates: `cell * scale + scale`.
    pub fn scaled(&self, scale: f64) -> ScaledEdge {
        let px = |cell: i64| cell as f64 * scale + scale;
        ScaledEdge {
            x1: px(self.x1),
            y1: px(self.y1),
            x2: px(self.x2),
            y2: px(self.y2),
            color: self.color.clone(),
        }
    }
}

/// An edge in canvas pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledEdge {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: String,
}

/// The kind of defect found in an edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    #[error("Missing a portion of the line, or missing a space.")]
    MalformedLine,
    #[error("Wrong number of arguments to coordinate number {point}")]
    MalformedPoint { point: u8 },
    #[error("Coordinate(s) contain non-integer value(s).")]
    NonIntegerCoordinate,
    #[error("Cannot draw edges, grid must be at least size {required}.")]
    GridTooSmall { required: usize },
}

/// A single defect, tagged with its 1-based source line when it has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: Option<usize>,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub const fn at_line(line: usize, kind: DiagnosticKind) -> Self {
        Self {
            line: Some(line),
            kind,
        }
    }

    pub const fn global(kind: DiagnosticKind) -> Self {
        Self { line: None, kind }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {line}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Outcome of validating an edge list against a grid size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationReport {
    Valid,
    Invalid {
        /// Every defect found, in input order. Empty for blank input.
        diagnostics: Vec<Diagnostic>,
        /// Minimum grid size implied by the input, set only when the grid
        /// was too small.
        required_size: Option<usize>,
    },
}

impl ValidationReport {
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Valid => &[],
            Self::Invalid { diagnostics, .. } => diagnostics,
        }
    }

    pub const fn required_size(&self) -> Option<usize> {
        match self {
            Self::Valid => None,
            Self::Invalid { required_size, .. } => *required_size,
        }
    }

    /// Full alert text for a rejected list, or `None` when there is nothing
    /// to explain (valid input, or blank input).
    pub fn alert_message(&self) -> Option<String> {
        let diagnostics = self.diagnostics();
        if diagnostics.is_empty() {
            return None;
        }
        let mut message = format!("{ALERT_HEADER}\n\n");
        for diagnostic in diagnostics {
            message.push_str(&diagnostic.to_string());
            message.push('\n');
        }
        Some(message)
    }
}
