// File: crates/scatter-core/tests/failure.rs
// Purpose: Validate the load-failure path: one static message, zero marks.

use scatter_core::{ChartView, LoadOutcome, RenderOptions, RowPolicy, LOAD_FAILURE_MESSAGE};

#[test]
fn missing_file_renders_one_message_and_no_circles() {
    let outcome = LoadOutcome::load(
        "target/test_out/definitely-does-not-exist.csv",
        RowPolicy::Skip,
        |_rec| unreachable!("mapper must not run when the resource is missing"),
    );
    assert!(!outcome.is_loaded());

    let view = ChartView::from_outcome(outcome, &RenderOptions::default());
    assert!(view.marks.is_empty());

    let scene = view.render();
    assert_eq!(scene.circle_count(), 0);
    let texts = scene.text_contents();
    assert_eq!(texts.len(), 1, "exactly one text element");
    assert_eq!(texts[0], LOAD_FAILURE_MESSAGE);
}

#[test]
fn unparseable_file_renders_the_same_message() {
    let dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("strict_failure.csv");
    std::fs::write(&path, "name,displacement,mpg,color\nBad,x,y,tomato\n").unwrap();

    let outcome = LoadOutcome::load(&path, RowPolicy::Strict, |rec| {
        Ok(scatter_core::DataRow {
            x: rec.number("displacement")?,
            y: rec.number("mpg")?,
            label: rec.field("name")?.to_string(),
            fill: rec.field("color")?.to_string(),
        })
    });
    assert!(!outcome.is_loaded());

    let view = ChartView::from_outcome(outcome, &RenderOptions::default());
    let scene = view.render();
    assert_eq!(scene.circle_count(), 0);
    assert_eq!(scene.text_contents(), vec![LOAD_FAILURE_MESSAGE]);
}
