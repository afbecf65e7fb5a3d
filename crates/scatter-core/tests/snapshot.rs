// File: crates/scatter-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small scatterplot to an SVG string.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares strings for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use scatter_core::{Animator, ChartView, DataRow, RenderOptions, ScatterChart};

fn render_svg() -> String {
    let chart = ScatterChart::from_rows(vec![
        DataRow { x: 160.0, y: 21.0, label: "Mazda RX4".into(), fill: "seagreen".into() },
        DataRow { x: 360.0, y: 14.3, label: "Duster 360".into(), fill: "tomato".into() },
        DataRow { x: 108.0, y: 22.8, label: "Datsun 710".into(), fill: "steelblue".into() },
    ]);
    let mut view = ChartView::from_chart(&chart, &RenderOptions::default());

    // Fixed seed and clock keep the animated opacities reproducible.
    let mut anim = Animator::new(7);
    anim.begin(&mut view, 0);
    anim.tick(&mut view, 1000);
    view.pointer_enter(0);

    scatter_core::svg::render_svg(&view.render())
}

#[test]
fn golden_basic_scatterplot() {
    let got = render_svg();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_scatterplot.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &got).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), got.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(got, want, "rendered SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}

#[test]
fn svg_has_expected_structure() {
    let svg = render_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<circle").count(), 3);
    assert!(svg.contains("id=\"marks\""));
    assert!(svg.contains("id=\"axes\""));
    assert!(svg.contains("id=\"tooltip\""));
    assert!(svg.contains("Mazda RX4"));
}
