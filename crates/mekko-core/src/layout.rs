// File: crates/mekko-core/src/layout.rs
// Summary: LayoutBundle, the immutable engine output consumed by the renderer and by tests.

use crate::category::Category;
use crate::series::StackSeries;

/// Computed Marimekko geometry.
///
/// Contract:
/// - `x_labels`, `widths`, `totals` and every series vector share one length and one order.
/// - `widths` are non-negative and sum to 1.0 (within float tolerance).
/// - `series` follows the caller's y-category list order; index 0 is the base of each stack.
///
/// Holds no reference to the source dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutBundle {
    pub x_labels: Vec<Category>,
    pub widths: Vec<f64>,
    pub totals: Vec<f64>,
    pub series: Vec<StackSeries>,
}

impl LayoutBundle {
    /// Number of bars.
    pub fn len(&self) -> usize {
        self.x_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_labels.is_empty()
    }

    /// Series for a y-category, looked up by key.
    pub fn series_for(&self, y: &Category) -> Option<&StackSeries> {
        self.series.iter().find(|s| &s.category == y)
    }

    pub fn heights(&self, y: &Category) -> Option<&[f64]> {
        self.series_for(y).map(|s| s.heights.as_slice())
    }

    pub fn labels(&self, y: &Category) -> Option<&[f64]> {
        self.series_for(y).map(|s| s.labels.as_slice())
    }

    pub fn subtotals(&self, y: &Category) -> Option<&[f64]> {
        self.series_for(y).map(|s| s.subtotals.as_slice())
    }

    /// Y-categories in stack order.
    pub fn y_categories(&self) -> impl Iterator<Item = &Category> + '_ {
        self.series.iter().map(|s| &s.category)
    }

    /// Left edge of each bar: the running sum of the preceding widths.
    pub fn offsets(&self) -> Vec<f64> {
        let mut acc = 0.0;
        self.widths
            .iter()
            .map(|w| {
                let left = acc;
                acc += w;
                left
            })
            .collect()
    }

    /// Center of each bar, where the x tick label goes.
    pub fn tick_positions(&self) -> Vec<f64> {
        self.offsets().iter().zip(&self.widths).map(|(l, w)| l + w * 0.5).collect()
    }

    /// Sum of segment heights for bar `x`. Equals 1.0 when the y-category list covers every
    /// y value in the data; shorter stacks are expected otherwise.
    pub fn stack_total(&self, x: usize) -> f64 {
        self.series.iter().filter_map(|s| s.heights.get(x)).sum()
    }
}
