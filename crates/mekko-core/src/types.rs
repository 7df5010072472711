// File: crates/mekko-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

use crate::geometry::PlotRect;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins around the plot area, in pixels. The bottom margin holds the x tick labels
/// and the legend; the top margin holds the title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Plot rectangle left over on a `width` x `height` surface, never narrower than one pixel.
    pub fn plot_rect(&self, width: i32, height: i32) -> PlotRect {
        let left = self.left as i32;
        let top = self.top as i32;
        let right = (width - self.right as i32).max(left + 1);
        let bottom = (height - self.bottom as i32).max(top + 1);
        PlotRect::from_ltrb(left, top, right, bottom)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(24, 24, 56, 72)
    }
}
