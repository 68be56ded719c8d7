use std::path::PathBuf;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tempfile::tempdir;

use crate::edges::DiagnosticKind;
use crate::grid::{Grid, MAX_GRID_SIZE};

use super::{App, DOT_COLORS, Message, Model, update};

fn create_test_model(text: &str) -> Model {
    Model::new(Grid::default(), text.to_string(), (80, 24))
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_draw_valid_edges_scales_them() {
    let model = update(create_test_model("0,0 1,1 red"), Message::Draw);
    assert!(model.drawn);
    assert!(!model.diagnostics_visible);
    assert_eq!(model.edges.len(), 1);
    // 500px canvas, 4x4 grid: 100px per step
    assert!((model.edges[0].x2 - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_draw_invalid_edges_opens_diagnostics() {
    let model = update(create_test_model("a,0 1,1 red"), Message::Draw);
    assert!(!model.drawn);
    assert!(model.edges.is_empty());
    assert!(model.diagnostics_visible);
    assert_eq!(
        model.report.as_ref().unwrap().diagnostics()[0].kind,
        DiagnosticKind::NonIntegerCoordinate
    );
    assert_eq!(model.diagnostic_lines().len(), 1);
}

#[test]
fn test_draw_blank_list_shows_toast_not_overlay() {
    let model = update(create_test_model("  \n"), Message::Draw);
    assert!(!model.drawn);
    assert!(!model.diagnostics_visible);
    assert_eq!(model.active_toast().map(|(m, _)| m), Some("Nothing to draw"));
}

#[test]
fn test_editing_edges_clears_drawing() {
    let model = update(create_test_model("0,0 1,1 red"), Message::Draw);
    let model = update(model, Message::EdgesChanged("0,0 2,2 blue".to_string()));
    assert!(!model.drawn);
    assert!(model.edges.is_empty());
    assert!(model.report.is_none());
    assert_eq!(model.edge_text, "0,0 2,2 blue");
}

#[test]
fn test_clear_empties_text_and_drawing() {
    let model = update(create_test_model("0,0 1,1 red"), Message::Draw);
    let model = update(model, Message::Clear);
    assert!(model.edge_text.is_empty());
    assert!(!model.drawn);
    assert!(model.edges.is_empty());
}

#[test]
fn test_growing_grid_rescales_drawn_edges() {
    let model = update(create_test_model("0,0 1,1 red"), Message::Draw);
    let model = update(model, Message::GrowGrid);
    assert_eq!(model.grid.size(), 5);
    assert!(model.drawn);
    let scale = 500.0 / 6.0;
    assert!((model.edges[0].x1 - scale).abs() < 1e-9);
}

#[test]
fn test_shrinking_grid_below_edges_rejects_drawing() {
    let model = update(create_test_model("0,0 3,3 red"), Message::Draw);
    assert!(model.drawn);
    let model = update(model, Message::ShrinkGrid);
    assert_eq!(model.grid.size(), 3);
    assert!(!model.drawn);
    assert!(model.diagnostics_visible);
    assert_eq!(model.report.as_ref().unwrap().required_size(), Some(4));
}

#[test]
fn test_resizing_undrawn_grid_does_not_draw() {
    let model = update(create_test_model("0,0 1,1 red"), Message::SetGridSize(9));
    assert_eq!(model.grid.size(), 9);
    assert!(!model.drawn);
    assert!(model.report.is_none());
}

#[test]
fn test_set_grid_size_never_goes_below_one() {
    let model = update(create_test_model(""), Message::SetGridSize(0));
    assert_eq!(model.grid.size(), 1);
}

#[test]
fn test_fit_grid_then_draw_succeeds() {
    let model = update(create_test_model("0,0 7,2 red\nbad line"), Message::FitGrid);
    assert_eq!(model.grid.size(), 8);

    let model = update(create_test_model("0,0 7,2 red"), Message::FitGrid);
    let model = update(model, Message::Draw);
    assert!(model.drawn);
}

#[test]
fn test_fit_grid_after_rejected_draw_redraws_nothing() {
    let model = update(create_test_model("0,0 9,9 red"), Message::Draw);
    let model = update(model, Message::FitGrid);
    assert_eq!(model.grid.size(), 10);
    // Fitting only resizes; the user draws again.
    assert!(!model.drawn);
}

#[test]
fn test_fit_grid_refuses_sizes_over_maximum() {
    let model = update(create_test_model("0,0 5000000000,0 red"), Message::FitGrid);
    assert_eq!(model.grid.size(), 4);
    let (message, level) = model.active_toast().unwrap();
    assert!(message.contains("5000000001x5000000001"));
    assert_eq!(level, super::ToastLevel::Warning);
    assert_eq!(model.grid.dot_positions().len(), 16);
}

#[test]
fn test_set_grid_size_is_capped() {
    let model = update(create_test_model(""), Message::SetGridSize(usize::MAX));
    assert_eq!(model.grid.size(), MAX_GRID_SIZE);
    let model = update(model, Message::GrowGrid);
    assert_eq!(model.grid.size(), MAX_GRID_SIZE);
}

#[test]
fn test_cycle_dot_color_wraps() {
    let mut model = create_test_model("");
    for expected in DOT_COLORS.iter().skip(1).chain(DOT_COLORS.iter().take(1)) {
        model = update(model, Message::CycleDotColor);
        assert_eq!(model.dot_color, *expected);
    }
}

#[test]
fn test_cycle_from_custom_color_restarts_list() {
    let model = update(create_test_model(""), Message::SetDotColor("orange".into()));
    let model = update(model, Message::CycleDotColor);
    assert_eq!(model.dot_color, DOT_COLORS[0]);
}

#[test]
fn test_dismiss_closes_help_before_diagnostics() {
    let model = update(create_test_model("nope"), Message::Draw);
    let model = update(model, Message::ToggleHelp);
    let model = update(model, Message::DismissOverlay);
    assert!(!model.help_visible);
    assert!(model.diagnostics_visible);
    let model = update(model, Message::DismissOverlay);
    assert!(!model.diagnostics_visible);
}

#[test]
fn test_quit_and_resize() {
    let model = update(create_test_model(""), Message::Resize(120, 40));
    assert_eq!(model.terminal_size, (120, 40));
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_keys_map_to_messages() {
    let model = create_test_model("");
    let cases = [
        (KeyCode::Enter, Message::Draw),
        (KeyCode::Char('d'), Message::Draw),
        (KeyCode::Char('c'), Message::Clear),
        (KeyCode::Char('+'), Message::GrowGrid),
        (KeyCode::Char('-'), Message::ShrinkGrid),
        (KeyCode::Char('f'), Message::FitGrid),
        (KeyCode::Char('s'), Message::Export),
        (KeyCode::Char('w'), Message::ToggleWatch),
        (KeyCode::Char('q'), Message::Quit),
    ];
    for (code, expected) in cases {
        assert_eq!(App::handle_event(&key(code), &model), Some(expected));
    }
    assert_eq!(App::handle_event(&key(KeyCode::Char('z')), &model), None);
}

#[test]
fn test_diagnostics_overlay_captures_keys() {
    let model = update(create_test_model("nope"), Message::Draw);
    assert_eq!(
        App::handle_event(&key(KeyCode::Char('c')), &model),
        None,
        "clear should not fire behind the alert"
    );
    assert_eq!(
        App::handle_event(&key(KeyCode::Esc), &model),
        Some(Message::DismissOverlay)
    );
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(App::handle_event(&ctrl_c, &model), Some(Message::Quit));
}

#[test]
fn test_file_change_reloads_and_redraws() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edges.txt");
    std::fs::write(&path, "0,0 1,1 red").unwrap();

    let model = create_test_model("0,0 1,1 red").with_file_path(&path);
    let mut model = update(model, Message::Draw);
    std::fs::write(&path, "0,0 1,1 red\n1,1 2,2 blue").unwrap();

    let mut watcher = None;
    App::handle_message_side_effects(&mut model, &mut watcher, &Message::FileChanged);
    assert_eq!(model.edge_text, "0,0 1,1 red\n1,1 2,2 blue");
    assert!(model.drawn, "a drawn list stays drawn after reload");
    assert_eq!(model.edges.len(), 2);
}

#[test]
fn test_reload_of_undrawn_list_stays_undrawn() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("edges.txt");
    std::fs::write(&path, "0,0 2,2 red").unwrap();

    let mut model = create_test_model("").with_file_path(&path);
    let mut watcher = None;
    App::handle_message_side_effects(&mut model, &mut watcher, &Message::ForceReload);
    assert_eq!(model.edge_text, "0,0 2,2 red");
    assert!(!model.drawn);
    assert_eq!(model.active_toast().map(|(m, _)| m), Some("Reloaded"));
}

#[test]
fn test_reload_missing_file_reports_error() {
    let mut model = create_test_model("").with_file_path("/definitely/not/here.txt");
    let mut watcher = None;
    App::handle_message_side_effects(&mut model, &mut watcher, &Message::ForceReload);
    let (message, level) = model.active_toast().unwrap();
    assert!(message.starts_with("Reload failed"));
    assert_eq!(level, super::ToastLevel::Error);
}

#[test]
fn test_export_writes_svg() {
    let dir = tempdir().unwrap();
    let mut model = update(create_test_model("0,0 1,1 red"), Message::Draw);
    model.export_path = dir.path().join("drawing.svg");

    let mut watcher = None;
    App::handle_message_side_effects(&mut model, &mut watcher, &Message::Export);
    let svg = std::fs::read_to_string(&model.export_path).unwrap();
    assert_eq!(svg.matches("<line").count(), 1);
}

#[test]
fn test_toggle_watch_without_file_is_disabled_again() {
    let model = update(create_test_model(""), Message::ToggleWatch);
    assert!(model.watch_enabled);
    let mut model = model;
    let mut watcher = None;
    App::handle_message_side_effects(&mut model, &mut watcher, &Message::ToggleWatch);
    assert!(!model.watch_enabled);
    assert!(watcher.is_none());
}

#[test]
fn test_initial_model_applies_app_settings() {
    let app = App::new(PathBuf::from("edges.txt"))
        .with_grid(Grid::new(6, 600, 600))
        .with_dot_color(Some("cyan".to_string()))
        .with_export_path(Some(PathBuf::from("out.svg")))
        .with_watch(true);
    let model = app.initial_model("0,0 1,1 red".to_string(), (80, 24));
    assert_eq!(model.grid.size(), 6);
    assert_eq!(model.dot_color, "cyan");
    assert_eq!(model.export_path, PathBuf::from("out.svg"));
    assert!(model.watch_enabled);
    assert_eq!(model.file_path, Some(PathBuf::from("edges.txt")));
}
