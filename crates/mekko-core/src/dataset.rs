// File: crates/mekko-core/src/dataset.rs
// Summary: Row-oriented input table (named columns, loosely typed cells) and the typed
// record projection the engine aggregates over.

use crate::category::Category;
use crate::error::ConfigurationError;

/// One cell of a dataset row.
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    Null,
    Number(f64),
    Text(String),
}

impl Field {
    /// Infer a cell from raw text: blank is `Null`, anything `f64` accepts is `Number`,
    /// everything else is `Text`.
    pub fn infer(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return Field::Null;
        }
        match s.parse::<f64>() {
            Ok(v) => Field::Number(v),
            Err(_) => Field::Text(s.to_string()),
        }
    }

    pub fn to_category(&self) -> Category {
        match self {
            Field::Null => Category::Missing,
            Field::Number(v) => Category::number(*v),
            Field::Text(s) => Category::Text(s.clone()),
        }
    }

    /// Numeric reading used for the value column. `Ok(None)` means "skip this record's value"
    /// (null or `NaN`); text is rejected.
    fn to_value(&self) -> Result<Option<f64>, &str> {
        match self {
            Field::Null => Ok(None),
            Field::Number(v) if v.is_nan() => Ok(None),
            Field::Number(v) => Ok(Some(*v)),
            Field::Text(s) => Err(s.as_str()),
        }
    }
}

impl From<f64> for Field {
    fn from(v: f64) -> Self {
        Field::Number(v)
    }
}

impl From<i64> for Field {
    fn from(v: i64) -> Self {
        Field::Number(v as f64)
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(v: Option<T>) -> Self {
        v.map_or(Field::Null, Into::into)
    }
}

/// Ordered rows under a declared schema. Rows may be shorter than the schema (ragged input);
/// the missing trailing cells are reported when a key column falls into them.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Field>>,
}

impl Dataset {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { columns: columns.into_iter().map(Into::into).collect(), rows: Vec::new() }
    }

    pub fn push_row(&mut self, row: Vec<Field>) {
        self.rows.push(row);
    }

    /// Builder-style row append, handy for literal datasets in tests and examples.
    pub fn with_row(mut self, row: Vec<Field>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn rows(&self) -> &[Vec<Field>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&Field> {
        let ci = self.column_index(column)?;
        self.rows.get(row)?.get(ci)
    }
}

/// Typed view of one row: the two category keys and the (possibly skipped) value.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub x: Category,
    pub y: Category,
    pub value: Option<f64>,
}

/// Column positions for the three keys, resolved once against the schema.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ColumnIndex {
    x: usize,
    y: usize,
    value: usize,
}

impl ColumnIndex {
    pub(crate) fn resolve(
        dataset: &Dataset,
        x_key: &str,
        y_key: &str,
        value_key: &str,
    ) -> Result<Self, ConfigurationError> {
        let find = |name: &str| {
            dataset
                .column_index(name)
                .ok_or_else(|| ConfigurationError::UnknownColumn { column: name.to_string() })
        };
        Ok(Self { x: find(x_key)?, y: find(y_key)?, value: find(value_key)? })
    }

    /// Project every row into a `Record`, failing on the first row that lacks a key column or
    /// carries text in the value column.
    pub(crate) fn project(&self, dataset: &Dataset) -> Result<Vec<Record>, ConfigurationError> {
        dataset
            .rows()
            .iter()
            .enumerate()
            .map(|(row, cells)| self.record(dataset, row, cells))
            .collect()
    }

    fn record(&self, dataset: &Dataset, row: usize, cells: &[Field]) -> Result<Record, ConfigurationError> {
        let cell = |ci: usize| {
            cells.get(ci).ok_or_else(|| ConfigurationError::MissingColumn {
                column: dataset.columns[ci].clone(),
                row,
            })
        };
        let x = cell(self.x)?.to_category();
        let y = cell(self.y)?.to_category();
        let value = cell(self.value)?.to_value().map_err(|raw| ConfigurationError::NonNumericValue {
            column: dataset.columns[self.value].clone(),
            row,
            raw: raw.to_string(),
        })?;
        Ok(Record { x, y, value })
    }
}
