use dotgrid::edges::{DiagnosticKind, parse_cells, required_size};
use dotgrid::export::render_svg;
use dotgrid::prelude::*;

const HOUSE: &str = include_str!("fixtures/house.txt");
const BROKEN: &str = include_str!("fixtures/broken.txt");

#[test]
fn test_house_needs_five_dots_per_side() {
    assert_eq!(required_size(HOUSE), 5);
    assert!(validate(HOUSE, 5).is_valid());

    let report = validate(HOUSE, 4);
    assert_eq!(report.required_size(), Some(5));
    assert_eq!(report.diagnostics().len(), 1);
}

#[test]
fn test_house_parses_every_edge_in_order() {
    let edges = parse_cells(HOUSE);
    assert_eq!(edges.len(), 9);
    assert_eq!((edges[0].x1, edges[0].y1, edges[0].x2, edges[0].y2), (0, 4, 4, 4));
    assert_eq!(edges[4].color, "red");
    assert_eq!(edges[8].color, "yellow");
}

#[test]
fn test_broken_file_reports_every_defect() {
    let report = validate(BROKEN, 4);
    let found: Vec<_> = report
        .diagnostics()
        .iter()
        .map(|d| (d.line, d.kind))
        .collect();
    assert_eq!(
        found,
        vec![
            (Some(2), DiagnosticKind::MalformedLine),
            (Some(3), DiagnosticKind::MalformedPoint { point: 1 }),
            (Some(5), DiagnosticKind::NonIntegerCoordinate),
            (None, DiagnosticKind::GridTooSmall { required: 13 }),
        ]
    );
}

#[test]
fn test_broken_file_size_check_passes_on_large_grid() {
    let report = validate(BROKEN, 13);
    assert_eq!(report.diagnostics().len(), 3);
    assert_eq!(report.required_size(), None);
}

#[test]
fn test_report_serializes_for_json_output() {
    let report = validate("0,0 1,1\n0,0 5,5 red", 2);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["status"], "invalid");
    assert_eq!(json["required_size"], 6);
    assert_eq!(json["diagnostics"][0]["line"], 1);
    assert_eq!(json["diagnostics"][0]["kind"], "malformed_line");
    assert_eq!(json["diagnostics"][1]["kind"], "grid_too_small");
    assert_eq!(json["diagnostics"][1]["required"], 6);

    let valid = serde_json::to_value(ValidationReport::Valid).unwrap();
    assert_eq!(valid["status"], "valid");
}

#[test]
fn test_validate_then_parse_on_grid() {
    let grid = Grid::new(5, 600, 600);
    assert!(grid.validate(HOUSE).is_valid());
    let edges = grid.edges(HOUSE);
    assert_eq!(edges, parse(HOUSE, 100.0));
    assert!((edges[0].y1 - 500.0).abs() < f64::EPSILON);

    let svg = render_svg(&grid, "white", &edges);
    assert_eq!(svg.matches("<line").count(), 9);
    assert_eq!(svg.matches("<circle").count(), 25);
}
