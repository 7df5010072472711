// File: crates/mekko-core/src/error.rs
// Summary: Error taxonomy for layout computation (configuration vs aggregation failures).

use crate::category::Category;

/// Missing, empty or inconsistent configuration. Raised before any aggregation work.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("y-category list is empty")]
    EmptyCategories,
    #[error("y-category `{0}` is listed more than once")]
    DuplicateCategory(Category),
    #[error("display scale divisor must be finite and non-zero, got {0}")]
    InvalidDivisor(f64),
    #[error("dataset has no records")]
    EmptyDataset,
    #[error("unknown column `{column}`")]
    UnknownColumn { column: String },
    #[error("record {row} has no cell for column `{column}`")]
    MissingColumn { column: String, row: usize },
    #[error("record {row}: column `{column}` holds non-numeric value `{raw}`")]
    NonNumericValue { column: String, row: usize, raw: String },
}

/// The data aggregated cleanly but cannot be laid out.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregationError {
    #[error("x-category `{category}` has a total of zero; its segment heights are undefined")]
    ZeroTotal { category: Category },
    #[error("x-category `{category}` has a negative total ({total}); bar widths must be non-negative")]
    NegativeTotal { category: Category, total: f64 },
    #[error("x-category `{category}` has a non-finite total")]
    NonFiniteTotal { category: Category },
    #[error("sum of all bar totals overflows ({bars} bars); widths cannot be normalized")]
    NonFiniteGrandTotal { bars: usize },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}

pub type Result<T> = std::result::Result<T, Error>;
