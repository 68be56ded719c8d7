//! Theming and color resolution.
//!
//! Edge colors are opaque tokens meant for a web canvas. The terminal can
//! only approximate them, so tokens are resolved best-effort and anything
//! unknown is drawn white.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

/// Fallback for color tokens the terminal cannot represent.
pub const FALLBACK_COLOR: Color = Color::White;

/// CSS color keywords that ratatui does not know by name.
const CSS_EXTRAS: &[(&str, (u8, u8, u8))] = &[
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("pink", (255, 192, 203)),
    ("brown", (165, 42, 42)),
    ("navy", (0, 0, 128)),
    ("teal", (0, 128, 128)),
    ("lime", (0, 255, 0)),
    ("maroon", (128, 0, 0)),
    ("olive", (128, 128, 0)),
    ("silver", (192, 192, 192)),
    ("gold", (255, 215, 0)),
    ("violet", (238, 130, 238)),
    ("indigo", (75, 0, 130)),
    ("coral", (255, 127, 80)),
    ("salmon", (250, 128, 114)),
];

/// Resolve an edge or dot color token to a terminal color.
pub fn color_for(token: &str) -> Color {
    let token = token.trim();
    if let Ok(color) = Color::from_str(token) {
        return color;
    }
    let lower = token.to_ascii_lowercase();
    CSS_EXTRAS
        .iter()
        .find(|(name, _)| *name == lower)
        .map_or(FALLBACK_COLOR, |(_, (r, g, b))| Color::Rgb(*r, *g, *b))
}

pub fn section_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn dim_style() -> Style {
    Style::default().fg(Color::Indexed(245))
}

pub fn error_line_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_hex_colors_resolve() {
        assert_eq!(color_for("red"), Color::Red);
        assert_eq!(color_for("#00ff00"), Color::Rgb(0, 255, 0));
    }

    #[test]
    fn test_css_keywords_resolve() {
        assert_eq!(color_for("orange"), Color::Rgb(255, 165, 0));
        assert_eq!(color_for("Purple"), Color::Rgb(128, 0, 128));
    }

    #[test]
    fn test_unknown_color_falls_back() {
        assert_eq!(color_for("rgba(1,2,3,0.5)"), FALLBACK_COLOR);
        assert_eq!(color_for("not-a-color"), FALLBACK_COLOR);
    }
}
