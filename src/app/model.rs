use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::edges::{ScaledEdge, ValidationReport};
use crate::export::DEFAULT_EXPORT_FILE;
use crate::grid::Grid;

/// Dot colors offered by the color control, in cycling order.
pub const DOT_COLORS: &[&str] = &["white", "yellow", "cyan", "magenta", "green", "red", "blue"];

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// Grid the edges are drawn on
    pub grid: Grid,
    /// Raw edge list, one descriptor per line
    pub edge_text: String,
    /// File the edge list was loaded from, if any
    pub file_path: Option<PathBuf>,
    /// Whether the edges are currently drawn (the "Draw" button state)
    pub drawn: bool,
    /// Fill color for grid dots
    pub dot_color: String,
    /// Report from the most recent draw attempt
    pub report: Option<ValidationReport>,
    /// Scaled edges shown on the canvas while `drawn`
    pub edges: Vec<ScaledEdge>,
    /// Whether the diagnostics overlay is visible
    pub diagnostics_visible: bool,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Whether file watching is enabled
    pub watch_enabled: bool,
    /// Where the drawing is saved on export
    pub export_path: PathBuf,
    /// Last known terminal size (columns, rows)
    pub terminal_size: (u16, u16),
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Grid::default(), String::new(), (80, 24))
    }
}

impl Model {
    /// Create a new model with default settings.
    pub fn new(grid: Grid, edge_text: String, terminal_size: (u16, u16)) -> Self {
        Self {
            grid,
            edge_text,
            file_path: None,
            drawn: false,
            dot_color: DOT_COLORS[0].to_string(),
            report: None,
            edges: Vec::new(),
            diagnostics_visible: false,
            help_visible: false,
            watch_enabled: false,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            terminal_size,
            config_global_path: None,
            config_local_path: None,
            toast: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Validate the edge list against the grid and draw it when valid.
    pub(super) fn draw(&mut self) {
        let report = self.grid.validate(&self.edge_text);
        if report.is_valid() {
            self.edges = self.grid.edges(&self.edge_text);
            self.drawn = true;
            self.diagnostics_visible = false;
        } else {
            self.edges.clear();
            self.drawn = false;
            self.diagnostics_visible = !report.diagnostics().is_empty();
            if !self.diagnostics_visible {
                self.show_toast(ToastLevel::Info, "Nothing to draw");
            }
        }
        tracing::debug!(
            drawn = self.drawn,
            edges = self.edges.len(),
            grid = self.grid.size(),
            "draw"
        );
        self.report = Some(report);
    }

    /// Forget the current drawing; the edge list must be drawn again.
    pub(super) fn undraw(&mut self) {
        self.drawn = false;
        self.edges.clear();
        self.report = None;
        self.diagnostics_visible = false;
    }

    /// Replace the grid, redrawing at the new scale if edges were shown.
    pub(super) fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
        if self.drawn {
            self.draw();
        }
    }

    pub(super) fn cycle_dot_color(&mut self) {
        let next = DOT_COLORS
            .iter()
            .position(|c| *c == self.dot_color)
            .map_or(0, |idx| (idx + 1) % DOT_COLORS.len());
        self.dot_color = DOT_COLORS[next].to_string();
    }

    /// Number of non-blank lines in the edge list.
    pub fn edge_line_count(&self) -> usize {
        self.edge_text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .count()
    }

    /// Diagnostics from the last draw attempt, formatted for display.
    pub fn diagnostic_lines(&self) -> Vec<String> {
        self.report
            .as_ref()
            .map(|report| {
                report
                    .diagnostics()
                    .iter()
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Read the edge file again. Returns the new text if it changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the model has no file or the file cannot be read.
    pub(super) fn read_edge_file(&self) -> Result<Option<String>> {
        let path = self
            .file_path
            .as_deref()
            .context("No edge file to reload")?;
        let text = read_edges(path)?;
        Ok((text != self.edge_text).then_some(text))
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

/// Read an edge list from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text.
pub fn read_edges(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read edge list {}", path.display()))
}
