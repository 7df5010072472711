// File: crates/mekko-core/src/geometry.rs
// Summary: Unit-space segment rectangles for a LayoutBundle and their mapping onto pixels.

use crate::layout::LayoutBundle;

/// Axis-aligned rectangle in chart units: x and y both span [0, 1], y grows upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl UnitRect {
    pub fn width(&self) -> f64 { self.x1 - self.x0 }
    pub fn height(&self) -> f64 { self.y1 - self.y0 }
    pub fn center(&self) -> (f64, f64) { ((self.x0 + self.x1) * 0.5, (self.y0 + self.y1) * 0.5) }
}

/// One drawable segment: bar `x`, stack layer `series`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x: usize,
    pub series: usize,
    pub rect: UnitRect,
}

/// Lay out every non-empty segment. Bars sit edge to edge from the left; within a bar, layers
/// stack upward in series order starting at 0.
pub fn segments(bundle: &LayoutBundle) -> Vec<Segment> {
    let offsets = bundle.offsets();
    let mut out = Vec::with_capacity(bundle.len() * bundle.series.len());
    for (x, (&left, &w)) in offsets.iter().zip(&bundle.widths).enumerate() {
        let mut base = 0.0;
        for (series, s) in bundle.series.iter().enumerate() {
            let h = s.heights[x];
            if h > 0.0 {
                out.push(Segment { x, series, rect: UnitRect { x0: left, y0: base, x1: left + w, y1: base + h } });
            }
            base += h;
        }
    }
    out
}

/// Pixel rectangle of the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PlotRect {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    #[inline]
    pub fn x_px(&self, x: f64) -> f32 {
        self.left as f32 + (clamp(x, 0.0, 1.0) * self.width() as f64) as f32
    }

    /// Unit y to pixels; y = 0 is the plot bottom.
    #[inline]
    pub fn y_px(&self, y: f64) -> f32 {
        self.bottom as f32 - (clamp(y, 0.0, 1.0) * self.height() as f64) as f32
    }

    /// Map a unit rectangle to pixel `(left, top, right, bottom)`.
    pub fn map(&self, r: &UnitRect) -> (f32, f32, f32, f32) {
        (self.x_px(r.x0), self.y_px(r.y1), self.x_px(r.x1), self.y_px(r.y0))
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
