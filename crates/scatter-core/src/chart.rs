// File: crates/scatter-core/src/chart.rs
// Summary: ScatterChart model, render options, and axis autoscaling.

use std::path::Path;

use crate::axis::Axis;
use crate::data::DataRow;
use crate::error::ChartResult;
use crate::scene::ChartView;
use crate::svg;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Mark radius in pixels.
    pub mark_radius: f32,
    /// Resting fill opacity each mark fades in to.
    pub mark_opacity: f32,
    pub draw_grid: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            mark_radius: 5.0,
            mark_opacity: 0.7,
            draw_grid: true,
        }
    }
}

pub struct ScatterChart {
    pub rows: Vec<DataRow>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl ScatterChart {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    /// Build a chart from rows with both axes autoscaled.
    pub fn from_rows(rows: Vec<DataRow>) -> Self {
        let mut c = Self::new();
        c.rows = rows;
        c.autoscale_axes();
        c
    }

    pub fn add_row(&mut self, row: DataRow) {
        self.rows.push(row);
    }

    /// Set each axis domain to exactly [min, max] over the row set.
    /// Empty charts fall back to the unit domain. Degenerate domains are
    /// widened at scale construction, not here, so the reported domain
    /// stays faithful to the data.
    pub fn autoscale_axes(&mut self) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for r in &self.rows {
            x_min = x_min.min(r.x);
            x_max = x_max.max(r.x);
            y_min = y_min.min(r.y);
            y_max = y_max.max(r.y);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            self.x_axis.min = 0.0;
            self.x_axis.max = 1.0;
            self.y_axis.min = 0.0;
            self.y_axis.max = 1.0;
            return;
        }
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = y_min;
        self.y_axis.max = y_max;
    }

    /// Render the chart to an SVG string.
    pub fn render_svg_string(&self, opts: &RenderOptions) -> String {
        let view = ChartView::from_chart(self, opts);
        svg::render_svg(&view.render())
    }

    /// Render the chart to an SVG file at `path`.
    pub fn render_to_svg(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> ChartResult<()> {
        let view = ChartView::from_chart(self, opts);
        svg::write_svg(&view.render(), path)
    }
}

impl Default for ScatterChart {
    fn default() -> Self { Self::new() }
}
