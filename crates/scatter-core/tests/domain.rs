// File: crates/scatter-core/tests/domain.rs
// Purpose: Validate that autoscaled axis domains equal [min, max] exactly.

use scatter_core::{DataRow, ScatterChart};

fn row(x: f64, y: f64) -> DataRow {
    DataRow { x, y, label: String::new(), fill: "steelblue".to_string() }
}

#[test]
fn domains_are_exact_min_max() {
    let chart = ScatterChart::from_rows(vec![
        row(160.0, 21.0),
        row(360.0, 15.0),
        row(108.0, 22.8),
        row(472.0, 10.4),
    ]);

    assert_eq!(chart.x_axis.min, 108.0);
    assert_eq!(chart.x_axis.max, 472.0);
    assert_eq!(chart.y_axis.min, 10.4);
    assert_eq!(chart.y_axis.max, 22.8);
}

#[test]
fn empty_chart_falls_back_to_unit_domain() {
    let chart = ScatterChart::from_rows(Vec::new());
    assert_eq!(chart.x_axis.min, 0.0);
    assert_eq!(chart.x_axis.max, 1.0);
    assert_eq!(chart.y_axis.min, 0.0);
    assert_eq!(chart.y_axis.max, 1.0);
}

#[test]
fn single_row_domain_is_degenerate_but_reported_faithfully() {
    let chart = ScatterChart::from_rows(vec![row(160.0, 21.0)]);
    // The axis keeps the true domain; widening happens inside the scale.
    assert_eq!(chart.x_axis.min, 160.0);
    assert_eq!(chart.x_axis.max, 160.0);
}
