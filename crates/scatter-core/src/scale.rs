// File: crates/scatter-core/src/scale.rs
// Summary: Linear domain-to-pixel scale, optionally inverted for the Y axis.

use crate::axis::Axis;
use crate::types::PlotRect;

/// Linear scale mapping a numeric domain onto a pixel range.
/// The range may run high-to-low, which is how the Y axis inverts
/// (larger values map to smaller pixel coordinates).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        let (d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 { d1 = d0 + 1.0; }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    /// Horizontal scale for `axis` across the plot rect, left to right.
    pub fn for_x(axis: &Axis, rect: &PlotRect) -> Self {
        Self::new((axis.min, axis.max), (rect.left, rect.right))
    }

    /// Vertical scale for `axis`, inverted: the domain minimum maps to the
    /// plot bottom since pixel Y grows downward.
    pub fn for_y(axis: &Axis, rect: &PlotRect) -> Self {
        Self::new((axis.min, axis.max), (rect.bottom, rect.top))
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.d1 - self.d0;
        self.r0 + ((v - self.d0) / span) as f32 * (self.r1 - self.r0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.d1 - self.d0;
        self.d0 + ((px - self.r0) / (self.r1 - self.r0)) as f64 * span
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f32, f32) { (self.r0, self.r1) }
}
