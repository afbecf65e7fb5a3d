// File: crates/demo/src/main.rs
// Summary: Demo loads the car CSV and renders scatterplot SVG frames with
// hover and animation applied.

use anyhow::{Context, Result};
use scatter_core::{Animator, ChartView, DataRow, LoadOutcome, RenderOptions, RowPolicy};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let raw = std::env::args().nth(1).unwrap_or_else(|| "data/cars.csv".to_string());
    let path = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());

    let opts = RenderOptions::default();

    // Single settle point: a chart on success, the static message otherwise.
    let outcome = LoadOutcome::load(&path, RowPolicy::Skip, car_row);
    let loaded = outcome.is_loaded();
    let mut view = ChartView::from_outcome(outcome, &opts);
    println!("Marks: {}", view.marks.len());

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).ok();

    let base = out_dir.join("cars.svg");
    scatter_core::svg::write_svg(&view.render(), &base)
        .with_context(|| format!("writing {}", base.display()))?;
    println!("Wrote {}", base.display());

    if !loaded {
        return Ok(());
    }

    // Hover the mark nearest the plot center.
    let (cx, cy) = (opts.width as f32 * 0.5, opts.height as f32 * 0.5);
    if let Some(id) = nearest_mark(&view, cx, cy) {
        let (mx, my) = {
            let m = view.mark(id).expect("nearest mark exists");
            (m.cx, m.cy)
        };
        view.pointer_move(mx, my);
        let hover = out_dir.join("cars_hover.svg");
        scatter_core::svg::write_svg(&view.render(), &hover)?;
        println!("Wrote {}", hover.display());
        view.pointer_move(-1.0, -1.0);
    }

    // A few animation frames: fade-in, then the unbounded opacity loop.
    let mut anim = Animator::new(7);
    anim.begin(&mut view, 0);
    for (i, now_ms) in [0u64, 300, 600, 1200, 2400, 4800].into_iter().enumerate() {
        anim.tick(&mut view, now_ms);
        let frame = out_dir.join(format!("cars_frame_{i}.svg"));
        scatter_core::svg::write_svg(&view.render(), &frame)?;
        println!("Wrote {} (t={now_ms}ms)", frame.display());
    }
    println!("Completed transitions so far: {}", anim.completions());

    Ok(())
}

/// Map one CSV record onto a DataRow: explicit numeric coercion for the two
/// numeric fields, pass-through for label and color.
fn car_row(rec: &scatter_core::RawRecord<'_>) -> scatter_core::ChartResult<DataRow> {
    Ok(DataRow {
        x: rec.number("displacement")?,
        y: rec.number("mpg")?,
        label: rec.field("name")?.to_string(),
        fill: rec.field("color")?.to_string(),
    })
}

/// Resolve the input path, trying the crate-local data directory as well so
/// the demo works from both the workspace root and the crate directory.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    let alt = Path::new("crates/demo").join(raw);
    if alt.exists() {
        return Ok(alt);
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn nearest_mark(view: &ChartView, px: f32, py: f32) -> Option<scatter_core::MarkId> {
    view.marks
        .iter()
        .min_by(|a, b| {
            let da = (a.cx - px).powi(2) + (a.cy - py).powi(2);
            let db = (b.cx - px).powi(2) + (b.cy - py).powi(2);
            da.total_cmp(&db)
        })
        .map(|m| m.id)
}
