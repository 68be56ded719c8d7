//! Edge list validation and coordinate transformation.
//!
//! Validation and transformation are two independent passes over the same
//! text. `validate` accumulates every defect it can find; `parse` assumes the
//! text already validated and only maps coordinates.

use super::types::{Diagnostic, DiagnosticKind, ScaledEdge, ValidatedEdge, ValidationReport};

/// Result of a single scan over the input lines.
#[derive(Debug, Default)]
struct Scan {
    diagnostics: Vec<Diagnostic>,
    size_required: usize,
}

/// Validate an edge list against a square grid of `grid_size` dots per side.
///
/// # Example
///
/// ```
/// use dotgrid::edges::validate;
///
/// assert!(validate("0,0 1,1 red", 2).is_valid());
/// assert!(!validate("0,0 3,3 red", 2).is_valid());
/// ```
pub fn validate(text: &str, grid_size: usize) -> ValidationReport {
    if text.trim().is_empty() {
        return ValidationReport::Invalid {
            diagnostics: Vec::new(),
            required_size: None,
        };
    }

    let Scan {
        mut diagnostics,
        size_required,
    } = scan(text);

    let required_size = if size_required > grid_size {
        diagnostics.push(Diagnostic::global(DiagnosticKind::GridTooSmall {
            required: size_required,
        }));
        Some(size_required)
    } else {
        None
    };

    tracing::debug!(
        grid_size,
        size_required,
        defects = diagnostics.len(),
        "validated edge list"
    );

    if diagnostics.is_empty() {
        ValidationReport::Valid
    } else {
        ValidationReport::Invalid {
            diagnostics,
            required_size,
        }
    }
}

/// Minimum grid size needed to hold every coordinate that parsed.
///
/// Lines with other defects still contribute the points that parsed cleanly.
pub fn required_size(text: &str) -> usize {
    scan(text).size_required
}

/// Parse an edge list into grid-cell edges, in line order.
///
/// Callers must have validated `text` first. Lines that would have produced
/// a diagnostic are skipped rather than reported.
pub fn parse_cells(text: &str) -> Vec<ValidatedEdge> {
    let mut edges = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if is_blank(line) {
            continue;
        }
        let Some([first, second, color]) = split_fields(line) else {
            tracing::warn!(line = idx + 1, "skipping unvalidated edge line");
            continue;
        };
        let (Ok((x1, y1)), Ok((x2, y2))) = (parse_point(first, 1), parse_point(second, 2)) else {
            tracing::warn!(line = idx + 1, "skipping unvalidated edge line");
            continue;
        };
        edges.push(ValidatedEdge {
            x1,
            y1,
            x2,
            y2,
            color: color.to_string(),
        });
    }
    edges
}

/// Parse a validated edge list and scale it to pixel coordinates.
///
/// Each coordinate maps to `cell * scale + scale`, so cell 0 sits one step
/// in from the canvas edge.
pub fn parse(text: &str, scale: f64) -> Vec<ScaledEdge> {
    parse_cells(text)
        .iter()
        .map(|edge| edge.scaled(scale))
        .collect()
}

fn scan(text: &str) -> Scan {
    let mut scan = Scan::default();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if is_blank(line) {
            continue;
        }
        let Some([first, second, _color]) = split_fields(line) else {
            scan.diagnostics
                .push(Diagnostic::at_line(line_no, DiagnosticKind::MalformedLine));
            continue;
        };
        for (point, field) in [(1, first), (2, second)] {
            match parse_point(field, point) {
                Ok((x, y)) => {
                    scan.size_required = scan
                        .size_required
                        .max(cells_needed(x))
                        .max(cells_needed(y));
                }
                Err(kind) => scan.diagnostics.push(Diagnostic::at_line(line_no, kind)),
            }
        }
    }
    scan
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Split a descriptor on single spaces into `point point color`.
fn split_fields(line: &str) -> Option<[&str; 3]> {
    let mut fields = line.split(' ');
    let parts = [fields.next()?, fields.next()?, fields.next()?];
    fields.next().is_none().then_some(parts)
}

fn parse_point(field: &str, point: u8) -> Result<(i64, i64), DiagnosticKind> {
    let mut coords = field.split(',');
    let (Some(x), Some(y), None) = (coords.next(), coords.next(), coords.next()) else {
        return Err(DiagnosticKind::MalformedPoint { point });
    };
    match (x.parse::<i64>(), y.parse::<i64>()) {
        (Ok(x), Ok(y)) => Ok((x, y)),
        _ => Err(DiagnosticKind::NonIntegerCoordinate),
    }
}

/// Number of cells per side needed to contain index `coord`.
fn cells_needed(coord: i64) -> usize {
    usize::try_from(coord.saturating_add(1)).unwrap_or(0)
}
