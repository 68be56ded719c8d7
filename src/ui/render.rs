use std::collections::HashSet;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::Model;

use super::{CANVAS_WIDTH_PERCENT, EDGE_LIST_WIDTH_PERCENT, canvas, overlays, status, style};

pub fn split_main_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(CANVAS_WIDTH_PERCENT),
            Constraint::Percentage(EDGE_LIST_WIDTH_PERCENT),
        ])
        .split(area)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let columns = split_main_columns(rows[0]);
    canvas::render_grid(model, frame, columns[0]);
    render_edge_list(model, frame, columns[1]);

    if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, rows[1]);
    } else {
        status::render_status_bar(model, frame, rows[1]);
    }

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    } else if model.diagnostics_visible {
        overlays::render_diagnostics_overlay(model, frame, area);
    }
}

/// The edge list with line numbers; lines with defects are highlighted.
fn render_edge_list(model: &Model, frame: &mut Frame, area: Rect) {
    let bad_lines: HashSet<usize> = model
        .report
        .as_ref()
        .map(|report| report.diagnostics().iter().filter_map(|d| d.line).collect())
        .unwrap_or_default();

    let visible_rows = area.height.saturating_sub(2) as usize;
    let items: Vec<Line> = model
        .edge_text
        .lines()
        .enumerate()
        .take(visible_rows)
        .map(|(idx, text)| {
            let line_no = idx + 1;
            let number = Span::styled(format!("{line_no:>3} "), style::dim_style());
            let body = if bad_lines.contains(&line_no) {
                Span::styled(text.to_string(), style::error_line_style())
            } else {
                Span::raw(text.to_string())
            };
            Line::from(vec![number, body])
        })
        .collect();

    let block = Block::default().title("Edges").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(items).block(block), area);
}
