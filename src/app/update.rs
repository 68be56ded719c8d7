use crate::app::{Model, ToastLevel};
use crate::edges;
use crate::grid::{Grid, MAX_GRID_SIZE};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Drawing
    /// Validate the edge list and draw it
    Draw,
    /// Empty the edge list and the drawing
    Clear,
    /// Edge list text replaced
    EdgesChanged(String),
    /// Save the drawing to the export path
    Export,

    // Grid
    /// One more dot per side
    GrowGrid,
    /// One fewer dot per side
    ShrinkGrid,
    /// Set dots per side
    SetGridSize(usize),
    /// Resize the grid to the smallest size that holds every edge
    FitGrid,
    /// Switch to the next dot color
    CycleDotColor,
    /// Set the dot color
    SetDotColor(String),

    // File watching
    /// Toggle file watching
    ToggleWatch,
    /// File changed externally, reload
    FileChanged,
    /// Force reload file
    ForceReload,

    // Overlays
    /// Toggle help overlay
    ToggleHelp,
    /// Close the topmost overlay
    DismissOverlay,

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// All state transitions happen here. File and export I/O happen in the
/// side-effect pass that runs after it.
pub fn update(mut model: Model, msg: Message) -> Model {
    tracing::trace!(?msg, "update");
    match msg {
        Message::Draw => model.draw(),
        Message::Clear => {
            model.edge_text.clear();
            model.undraw();
        }
        Message::EdgesChanged(text) => {
            model.edge_text = text;
            model.undraw();
        }
        Message::GrowGrid => {
            let grid = model.grid.grow();
            model.set_grid(grid);
        }
        Message::ShrinkGrid => {
            let grid = model.grid.shrink();
            model.set_grid(grid);
        }
        Message::SetGridSize(size) => {
            let grid = model.grid.with_size(size.max(1));
            model.set_grid(grid);
        }
        Message::FitGrid => {
            let needed = edges::required_size(&model.edge_text).max(1);
            if Grid::supports(needed) {
                let grid = model.grid.with_size(needed);
                model.set_grid(grid);
            } else {
                model.show_toast(
                    ToastLevel::Warning,
                    format!("Edges need a {needed}x{needed} grid, the largest is {MAX_GRID_SIZE}"),
                );
            }
        }
        Message::CycleDotColor => model.cycle_dot_color(),
        Message::SetDotColor(color) => model.dot_color = color,
        Message::ToggleWatch => model.watch_enabled = !model.watch_enabled,
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::DismissOverlay => {
            if model.help_visible {
                model.help_visible = false;
            } else {
                model.diagnostics_visible = false;
            }
        }
        Message::Resize(width, height) => model.terminal_size = (width, height),
        Message::Quit => model.should_quit = true,
        // Handled by the side-effect pass
        Message::Export | Message::FileChanged | Message::ForceReload => {}
    }
    model
}
