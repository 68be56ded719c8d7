//! SVG export of the current drawing.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::edges::ScaledEdge;
use crate::grid::Grid;

/// Default file name used when saving a drawing from the viewer.
pub const DEFAULT_EXPORT_FILE: &str = "dots.svg";

const BACKGROUND: &str = "#1e1e1e";

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render dots and edges as a standalone SVG document.
pub fn render_svg(grid: &Grid, dot_color: &str, edges: &[ScaledEdge]) -> String {
    let mut out = String::new();
    let (width, height) = (grid.width(), grid.height());
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect width="{width}" height="{height}" fill="{BACKGROUND}"/>"#
    );

    let radius = grid.dot_radius();
    let fill = escape(dot_color);
    for (x, y) in grid.dot_positions() {
        let _ = writeln!(
            out,
            r#"  <circle cx="{x}" cy="{y}" r="{radius}" fill="{fill}"/>"#
        );
    }

    let stroke_width = grid.line_width();
    for edge in edges {
        let _ = writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{stroke_width}" stroke-linecap="round"/>"#,
            edge.x1,
            edge.y1,
            edge.x2,
            edge.y2,
            escape(&edge.color)
        );
    }

    out.push_str("</svg>\n");
    out
}

/// Write the drawing to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_svg(path: &Path, grid: &Grid, dot_color: &str, edges: &[ScaledEdge]) -> Result<()> {
    let svg = render_svg(grid, dot_color, edges);
    fs::write(path, svg).with_context(|| format!("Failed to write drawing {}", path.display()))?;
    tracing::info!(path = %path.display(), edges = edges.len(), "exported drawing");
    Ok(())
}
