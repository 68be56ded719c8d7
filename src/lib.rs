#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. edges::ScaledEdge)
    clippy::module_name_repetitions
)]

//! # dotgrid
//!
//! Connect the dots in the terminal.
//!
//! dotgrid reads a plain-text edge list, one `x1,y1 x2,y2 color` descriptor
//! per line, checks it against a square grid of dots and draws the edges:
//! - Every defect in the list is reported at once, with line numbers
//! - The grid can be resized or fitted to the edges
//! - Edge files can be watched and redrawn on save
//! - Drawings can be exported as SVG
//!
//! ## Architecture
//!
//! The viewer uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`edges`]: Edge list validation and parsing
//! - [`grid`]: Dot grid geometry
//! - [`export`]: SVG export
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`watcher`]: File watching
//! - [`config`]: Saved flag defaults
//! - [`logging`]: Tracing subscriber setup

pub mod app;
pub mod config;
pub mod edges;
pub mod export;
pub mod grid;
pub mod logging;
pub mod ui;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::edges::{ScaledEdge, ValidationReport, parse, validate};
    pub use crate::grid::Grid;
}
