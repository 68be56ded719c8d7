//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! Terminal input and file watcher notifications are both turned into
//! [`Message`]s; the renderer only ever reads the [`Model`].

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{DOT_COLORS, Model, ToastLevel, read_edges};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::grid::Grid;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    grid: Grid,
    dot_color: Option<String>,
    export_path: Option<PathBuf>,
    watch_enabled: bool,
    draw_on_start: bool,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application for the given edge file.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            grid: Grid::default(),
            dot_color: None,
            export_path: None,
            watch_enabled: false,
            draw_on_start: false,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Set the initial grid (size and canvas dimensions).
    pub const fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    /// Set the initial dot color.
    pub fn with_dot_color(mut self, color: Option<String>) -> Self {
        self.dot_color = color;
        self
    }

    /// Set where `s` saves the drawing.
    pub fn with_export_path(mut self, path: Option<PathBuf>) -> Self {
        self.export_path = path;
        self
    }

    /// Enable or disable file watching.
    pub const fn with_watch(mut self, enabled: bool) -> Self {
        self.watch_enabled = enabled;
        self
    }

    /// Draw the edge list as soon as the viewer opens.
    pub const fn with_draw_on_start(mut self, enabled: bool) -> Self {
        self.draw_on_start = enabled;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}

#[cfg(test)]
mod tests;
