// File: crates/scatter-core/tests/marks.rs
// Purpose: Validate mark count and pixel-position ordering under the scales.

use scatter_core::{ChartView, DataRow, RenderOptions, ScatterChart};

fn row(x: f64, y: f64, label: &str) -> DataRow {
    DataRow { x, y, label: label.to_string(), fill: "tomato".to_string() }
}

#[test]
fn one_mark_per_row() {
    let chart = ScatterChart::from_rows(vec![
        row(160.0, 21.0, "a"),
        row(360.0, 15.0, "b"),
        row(225.0, 18.1, "c"),
    ]);
    let view = ChartView::from_chart(&chart, &RenderOptions::default());
    assert_eq!(view.marks.len(), 3);
    assert_eq!(view.render().circle_count(), 3);
}

#[test]
fn larger_x_maps_to_larger_pixel_x() {
    let chart = ScatterChart::from_rows(vec![
        row(160.0, 21.0, "small"),
        row(360.0, 15.0, "big"),
    ]);
    let view = ChartView::from_chart(&chart, &RenderOptions::default());
    assert!(view.marks[0].cx < view.marks[1].cx, "x=160 must sit left of x=360");
}

#[test]
fn pixel_y_is_monotonically_decreasing_in_y() {
    // Higher data y => smaller pixel y, since the vertical scale is inverted.
    let chart = ScatterChart::from_rows(vec![
        row(100.0, 10.0, "low"),
        row(200.0, 20.0, "mid"),
        row(300.0, 30.0, "high"),
    ]);
    let view = ChartView::from_chart(&chart, &RenderOptions::default());
    assert!(view.marks[1].cy < view.marks[0].cy);
    assert!(view.marks[2].cy < view.marks[1].cy);
}

#[test]
fn marks_fill_resolves_from_palette() {
    let mut rows = vec![row(1.0, 1.0, "a")];
    rows[0].fill = "steelblue".to_string();
    rows.push(DataRow { x: 2.0, y: 2.0, label: "b".into(), fill: "no-such-color".into() });
    let chart = ScatterChart::from_rows(rows);
    let opts = RenderOptions::default();
    let view = ChartView::from_chart(&chart, &opts);
    assert_eq!(view.marks[0].fill, opts.theme.fill("steelblue"));
    assert_eq!(view.marks[1].fill, opts.theme.mark_fallback);
}
