// File: crates/mekko-core/src/engine.rs
// Summary: Aggregation/geometry engine: groups records by x-category, orders the bars and derives
// widths, stacked heights and display labels.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::category::Category;
use crate::dataset::{ColumnIndex, Dataset, Record};
use crate::error::{AggregationError, ConfigurationError, Result};
use crate::layout::LayoutBundle;
use crate::series::StackSeries;

/// Default scale applied to subtotals before rounding them into labels (values shown in 000s).
pub const DEFAULT_DISPLAY_DIVISOR: f64 = 1000.0;

/// X-axis ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortPolicy {
    /// Ascending by x-category key, missing keys first.
    #[default]
    ByXCategory,
    /// Descending by bar total, missing keys first; equal totals keep ascending key order.
    ByTotalValueDesc,
}

/// Which records contribute to `total(x)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TotalPolicy {
    /// Every record with that x-category, listed y-category or not. Stacks fall short of 1.0
    /// when the list does not cover every y value.
    #[default]
    AllRecords,
    /// Only records whose y-category is listed; unlisted records are dropped before grouping,
    /// so every stack sums to 1.0.
    ListedCategories,
}

/// Per-bar aggregation result: the bar total plus one subtotal per listed y-category.
#[derive(Clone, Debug, PartialEq)]
pub struct XCategoryAggregate {
    pub category: Category,
    pub total: f64,
    /// Aligned with the y-category list; zero where no record matches.
    pub subtotals: Vec<f64>,
}

/// Engine configuration: which columns to read and how to order and scale the output.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutSpec {
    pub x_key: String,
    pub y_key: String,
    pub value_key: String,
    pub y_categories: Vec<Category>,
    pub sort: SortPolicy,
    pub display_divisor: f64,
    pub total_policy: TotalPolicy,
}

impl LayoutSpec {
    pub fn new(
        x_key: impl Into<String>,
        y_key: impl Into<String>,
        value_key: impl Into<String>,
        y_categories: Vec<Category>,
    ) -> Self {
        Self {
            x_key: x_key.into(),
            y_key: y_key.into(),
            value_key: value_key.into(),
            y_categories,
            sort: SortPolicy::default(),
            display_divisor: DEFAULT_DISPLAY_DIVISOR,
            total_policy: TotalPolicy::default(),
        }
    }

    pub fn with_sort(mut self, sort: SortPolicy) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_display_divisor(mut self, divisor: f64) -> Self {
        self.display_divisor = divisor;
        self
    }

    pub fn with_total_policy(mut self, policy: TotalPolicy) -> Self {
        self.total_policy = policy;
        self
    }

    /// Check the settings that do not depend on the data, then resolve the key columns and
    /// project every row. Nothing is summed until this succeeds.
    fn validate(&self, dataset: &Dataset) -> std::result::Result<Vec<Record>, ConfigurationError> {
        if self.y_categories.is_empty() {
            return Err(ConfigurationError::EmptyCategories);
        }
        let mut seen = HashSet::with_capacity(self.y_categories.len());
        for y in &self.y_categories {
            if !seen.insert(y) {
                return Err(ConfigurationError::DuplicateCategory(y.clone()));
            }
        }
        if !self.display_divisor.is_finite() || self.display_divisor == 0.0 {
            return Err(ConfigurationError::InvalidDivisor(self.display_divisor));
        }
        if dataset.is_empty() {
            return Err(ConfigurationError::EmptyDataset);
        }
        ColumnIndex::resolve(dataset, &self.x_key, &self.y_key, &self.value_key)?.project(dataset)
    }

    /// Group, sum and order the bars (no normalization yet).
    pub fn aggregate(&self, dataset: &Dataset) -> Result<Vec<XCategoryAggregate>> {
        let records = self.validate(dataset)?;
        let slots: HashMap<&Category, usize> =
            self.y_categories.iter().enumerate().map(|(i, y)| (y, i)).collect();

        // BTreeMap iteration yields ascending keys, Missing first.
        let mut groups: BTreeMap<Category, (f64, Vec<f64>)> = BTreeMap::new();
        for rec in records {
            let slot = slots.get(&rec.y).copied();
            if slot.is_none() && self.total_policy == TotalPolicy::ListedCategories {
                continue;
            }
            let (total, subtotals) = groups
                .entry(rec.x)
                .or_insert_with(|| (0.0, vec![0.0; self.y_categories.len()]));
            let Some(v) = rec.value else { continue };
            *total += v;
            if let Some(i) = slot {
                subtotals[i] += v;
            }
        }

        let mut out: Vec<XCategoryAggregate> = groups
            .into_iter()
            .map(|(category, (total, subtotals))| XCategoryAggregate { category, total, subtotals })
            .collect();
        if self.sort == SortPolicy::ByTotalValueDesc {
            // Stable: equal totals stay in key order.
            out.sort_by(|a, b| {
                b.category
                    .is_missing()
                    .cmp(&a.category.is_missing())
                    .then_with(|| b.total.total_cmp(&a.total))
            });
        }
        tracing::debug!(x_categories = out.len(), rows = dataset.len(), "aggregated dataset");
        Ok(out)
    }

    /// Run the full pipeline and produce the layout bundle.
    pub fn compute(&self, dataset: &Dataset) -> Result<LayoutBundle> {
        let bars = self.aggregate(dataset)?;
        for bar in &bars {
            check_total(bar)?;
        }

        let grand: f64 = bars.iter().map(|b| b.total).sum();
        if !grand.is_finite() {
            return Err(AggregationError::NonFiniteGrandTotal { bars: bars.len() }.into());
        }
        let widths = bars.iter().map(|b| b.total / grand).collect();
        let totals: Vec<f64> = bars.iter().map(|b| b.total).collect();

        let series = self
            .y_categories
            .iter()
            .enumerate()
            .map(|(i, y)| {
                let subtotals: Vec<f64> = bars.iter().map(|b| b.subtotals[i]).collect();
                let heights = subtotals.iter().zip(&totals).map(|(s, t)| s / t).collect();
                let labels = subtotals
                    .iter()
                    .map(|s| (s / self.display_divisor).round_ties_even())
                    .collect();
                StackSeries { category: y.clone(), subtotals, heights, labels }
            })
            .collect();

        tracing::debug!(bars = bars.len(), series = self.y_categories.len(), grand_total = grand, "computed layout");
        Ok(LayoutBundle {
            x_labels: bars.into_iter().map(|b| b.category).collect(),
            widths,
            totals,
            series,
        })
    }
}

fn check_total(bar: &XCategoryAggregate) -> std::result::Result<(), AggregationError> {
    let category = bar.category.clone();
    if !bar.total.is_finite() {
        return Err(AggregationError::NonFiniteTotal { category });
    }
    if bar.total == 0.0 {
        return Err(AggregationError::ZeroTotal { category });
    }
    if bar.total < 0.0 {
        return Err(AggregationError::NegativeTotal { category, total: bar.total });
    }
    Ok(())
}

/// One-call form of [`LayoutSpec::compute`] with the default divisor and total policy.
pub fn compute(
    dataset: &Dataset,
    x_key: &str,
    y_key: &str,
    value_key: &str,
    y_categories: &[Category],
    sort: SortPolicy,
) -> Result<LayoutBundle> {
    LayoutSpec::new(x_key, y_key, value_key, y_categories.to_vec())
        .with_sort(sort)
        .compute(dataset)
}
