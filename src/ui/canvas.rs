//! The dot grid drawn with ratatui's braille canvas.

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders};

use crate::app::Model;

use super::style::color_for;

/// Largest rect inside `area` that looks square on a terminal whose cells
/// are about twice as tall as they are wide.
pub fn square_rect(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2).max(1);
    let width = (height * 2).min(area.width);
    let x = area.x + area.width.saturating_sub(width) / 2;
    Rect::new(x, area.y, width, height)
}

pub fn render_grid(model: &Model, frame: &mut Frame, area: Rect) {
    let grid = &model.grid;
    let (width, height) = (grid.width(), grid.height());
    // Canvas y grows upward; pixel y grows downward.
    let flip = |y: f64| height - y;

    let dots: Vec<(f64, f64)> = grid
        .dot_positions()
        .into_iter()
        .map(|(x, y)| (x, flip(y)))
        .collect();
    let dot_color = color_for(&model.dot_color);

    let title = format!(
        " {0}x{0} grid{1} ",
        grid.size(),
        if model.drawn { " - drawn" } else { "" }
    );
    let canvas = Canvas::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &dots,
                color: dot_color,
            });
            ctx.layer();
            for edge in &model.edges {
                ctx.draw(&CanvasLine::new(
                    edge.x1,
                    flip(edge.y1),
                    edge.x2,
                    flip(edge.y2),
                    color_for(&edge.color),
                ));
            }
        });

    frame.render_widget(canvas, square_rect(area));
}
