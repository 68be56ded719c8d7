//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`canvas`]: The dot grid and drawn edges
//! - [`style`]: Theming and color resolution

pub mod canvas;
pub mod style;

mod overlays;
mod render;
mod status;

pub use render::{render, split_main_columns};

pub const CANVAS_WIDTH_PERCENT: u16 = 65;
pub const EDGE_LIST_WIDTH_PERCENT: u16 = 35;
