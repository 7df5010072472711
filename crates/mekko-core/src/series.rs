// File: crates/mekko-core/src/series.rs
// Summary: Per-y-category stack series (subtotals, heights, labels) aligned with the x order.

use crate::category::Category;

/// One stacked layer of the chart: a y-category and its values for every bar.
///
/// All three vectors have the same length as the bundle's `x_labels` and are aligned index by
/// index. Missing (x, y) combinations are explicit zeros.
#[derive(Clone, Debug, PartialEq)]
pub struct StackSeries {
    pub category: Category,
    /// Raw sums of value per bar.
    pub subtotals: Vec<f64>,
    /// `subtotal / total(x)`; the segment height inside the unit-high bar.
    pub heights: Vec<f64>,
    /// Display-rounded subtotals (scaled by the display divisor) for on-bar text.
    pub labels: Vec<f64>,
}

impl StackSeries {
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Format a label value for drawing: whole numbers without a fraction, no negative zero.
    pub fn label_text(&self, x: usize) -> Option<String> {
        let v = *self.labels.get(x)?;
        let v = if v == 0.0 { 0.0 } else { v };
        Some(format!("{v:.0}"))
    }
}
