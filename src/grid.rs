//! Dot grid geometry.
//!
//! A grid of `size` x `size` dots is laid out on a canvas so that every dot
//! sits one scale step in from the top-left corner.

use anyhow::{Result, bail};

use crate::edges::{self, ScaledEdge, ValidationReport};

pub const DEFAULT_GRID_SIZE: usize = 4;
pub const DEFAULT_CANVAS_SIZE: u32 = 500;
/// Most dots per side a grid can have.
pub const MAX_GRID_SIZE: usize = 500;

/// Largest radius a dot is drawn with, in pixels.
const MAX_DOT_RADIUS: f64 = 4.0;
/// Largest stroke an edge is drawn with, in pixels.
const MAX_LINE_WIDTH: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    size: usize,
    width: f64,
    height: f64,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE)
    }
}

impl Grid {
    /// Sizes above [`MAX_GRID_SIZE`] are clamped.
    pub fn new(size: usize, width: u32, height: u32) -> Self {
        Self {
            size: clamp_size(size),
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    /// Build the grid from command-line or saved flags.
    ///
    /// A viewer grid has at least one dot per side; batch checks keep a
    /// size of 0 so that any non-empty list is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is above [`MAX_GRID_SIZE`].
    pub fn from_flags(size: Option<usize>, width: Option<u32>, viewer: bool) -> Result<Self> {
        let size = size.unwrap_or(DEFAULT_GRID_SIZE);
        if !Self::supports(size) {
            bail!("Grid size {size} is too large (at most {MAX_GRID_SIZE} dots per side)");
        }
        let size = if viewer { size.max(1) } else { size };
        let width = width.unwrap_or(DEFAULT_CANVAS_SIZE);
        Ok(Self::new(size, width, width))
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = clamp_size(size);
        self
    }

    #[must_use]
    pub const fn grow(self) -> Self {
        self.with_size(self.size.saturating_add(1))
    }

    /// One dot smaller, never below a single dot.
    #[must_use]
    pub const fn shrink(self) -> Self {
        if self.size <= 1 {
            return self.with_size(1);
        }
        self.with_size(self.size - 1)
    }

    /// Whether `size` dots per side fit under [`MAX_GRID_SIZE`].
    pub const fn supports(size: usize) -> bool {
        size <= MAX_GRID_SIZE
    }

    /// Pixels per grid step.
    pub fn scale(&self) -> f64 {
        self.width / (self.size as f64 + 1.0)
    }

    /// Pixel position of every dot, row-major.
    pub fn dot_positions(&self) -> Vec<(f64, f64)> {
        let scale = self.scale();
        let mut points = Vec::with_capacity(self.size * self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                points.push((row as f64 * scale + scale, col as f64 * scale + scale));
            }
        }
        points
    }

    /// Dots shrink once the grid gets dense enough that they would touch.
    pub fn dot_radius(&self) -> f64 {
        MAX_DOT_RADIUS.min(100.0 / self.size as f64)
    }

    pub fn line_width(&self) -> f64 {
        MAX_LINE_WIDTH.min(100.0 / self.size as f64 * 2.0)
    }

    pub fn validate(&self, text: &str) -> ValidationReport {
        edges::validate(text, self.size)
    }

    /// Scaled edges for text that already passed [`Grid::validate`].
    pub fn edges(&self, text: &str) -> Vec<ScaledEdge> {
        edges::parse(text, self.scale())
    }
}

const fn clamp_size(size: usize) -> usize {
    if size > MAX_GRID_SIZE {
        MAX_GRID_SIZE
    } else {
        size
    }
}
