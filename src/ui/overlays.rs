use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::app::Model;
use crate::edges::ALERT_HEADER;
use crate::grid::Grid;

use super::style::{dim_style, section_style};

/// The "alert" shown when a draw attempt is rejected.
pub fn render_diagnostics_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let diagnostics = model.diagnostic_lines();
    if diagnostics.is_empty() {
        return;
    }

    let mut lines: Vec<Line> = ALERT_HEADER.lines().map(Line::raw).collect();
    lines.push(Line::raw(""));
    lines.extend(
        diagnostics
            .into_iter()
            .map(|d| Line::styled(d, Style::default().fg(Color::LightRed))),
    );
    lines.push(Line::raw(""));
    let hint = match model.report.as_ref().and_then(|r| r.required_size()) {
        Some(required) if Grid::supports(required) => {
            format!("f: resize grid to {required} \u{2502} Esc closes")
        }
        _ => "Esc closes".to_string(),
    };
    lines.push(Line::styled(hint, dim_style()));

    #[allow(clippy::cast_possible_truncation)]
    let needed_rows = (lines.len() as u16).saturating_add(4);
    let popup_width = area.width.saturating_sub(8).clamp(20, 90);
    let popup_height = needed_rows.min(area.height.saturating_sub(2).max(6));
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let block = Block::default()
        .title("Cannot draw edges")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        popup,
    );
}

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(2).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let lines = vec![
        Line::styled("Drawing", section_style()),
        Line::raw("  Enter / d           Draw edges"),
        Line::raw("  c                   Clear edge list"),
        Line::raw(format!(
            "  s                   Save drawing ({})",
            model.export_path.display()
        )),
        Line::raw(""),
        Line::styled("Grid", section_style()),
        Line::raw("  + / Up              Larger grid"),
        Line::raw("  - / Down            Smaller grid"),
        Line::raw("  f                   Fit grid to edges"),
        Line::raw("  o                   Next dot color"),
        Line::raw(""),
        Line::styled("Edge list", section_style()),
        Line::raw("  one edge per line:  x1,y1 x2,y2 color"),
        Line::raw("  w                   Toggle watch"),
        Line::raw("  r                   Reload file"),
        Line::raw(""),
        Line::styled("Other", section_style()),
        Line::raw("  q / Ctrl-c          Quit"),
        Line::raw("  ?                   Toggle help"),
        Line::raw(""),
        Line::styled("Config", section_style()),
        Line::raw(format!("  Global: {global_cfg}")),
        Line::raw(format!("  Local override: {local_cfg}")),
        Line::raw(""),
        Line::styled("Esc closes", dim_style()),
    ];

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
