// File: crates/scatter-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing an SVG file.

use scatter_core::{DataRow, RenderOptions, ScatterChart};

#[test]
fn render_smoke_svg() {
    let chart = ScatterChart::from_rows(vec![
        DataRow { x: 71.1, y: 33.9, label: "Toyota Corolla".into(), fill: "steelblue".into() },
        DataRow { x: 472.0, y: 10.4, label: "Cadillac Fleetwood".into(), fill: "tomato".into() },
        DataRow { x: 225.0, y: 18.1, label: "Valiant".into(), fill: "seagreen".into() },
    ]);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_svg(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "svg should be non-empty");

    // Also verify the in-memory API works
    let svg = chart.render_svg_string(&opts);
    assert!(svg.starts_with("<svg"), "should be an SVG document");
}
