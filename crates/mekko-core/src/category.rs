// File: crates/mekko-core/src/category.rs
// Summary: Discrete category keys for the x and y dimensions, with a total order.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A discrete key on the x or y dimension.
///
/// Ordering: `Missing < Number < Text`. Numbers compare with `f64::total_cmp`, text
/// lexicographically, with `-0.0` and `0.0` as one key. `NaN` never appears inside `Number`;
/// it becomes `Missing`.
#[derive(Clone, Debug)]
pub enum Category {
    Missing,
    Number(f64),
    Text(String),
}

impl Category {
    /// Build a category from raw text using the same inference as dataset cells.
    pub fn parse(raw: &str) -> Self {
        crate::dataset::Field::infer(raw).to_category()
    }

    pub fn number(v: f64) -> Self {
        if v.is_nan() { Category::Missing } else { Category::Number(v + 0.0) }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Category::Missing)
    }

    fn rank(&self) -> u8 {
        match self {
            Category::Missing => 0,
            Category::Number(_) => 1,
            Category::Text(_) => 2,
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Category {}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // `+ 0.0` folds -0.0 into 0.0.
            (Category::Number(a), Category::Number(b)) => (a + 0.0).total_cmp(&(b + 0.0)),
            (Category::Text(a), Category::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Category::Missing => {}
            Category::Number(v) => (v + 0.0).to_bits().hash(state),
            Category::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Missing => f.write_str("(blank)"),
            // Integral keys (years, codes) print without a trailing ".0".
            Category::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            Category::Number(v) => write!(f, "{v}"),
            Category::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::Text(s.to_string())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::Text(s)
    }
}

impl From<f64> for Category {
    fn from(v: f64) -> Self {
        Category::number(v)
    }
}

impl From<i64> for Category {
    fn from(v: i64) -> Self {
        Category::Number(v as f64)
    }
}
