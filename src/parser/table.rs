//! In-memory representation of a decoded periodic log.
//!
//! A `Table` is row-oriented: row `i` is the sample taken at
//! `i * timestep` and every row holds exactly one value per column.
//! Tables are never mutated after creation; every transform builds a new one.

use crate::utils::error::TransformError;

/// Fixed-schema numeric table, one row per timestep
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl Table {
    /// Build a table, checking that every row matches the schema width
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, TransformError> {
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(TransformError::InvalidArgument(format!(
                "row {} has {} values but the schema has {} columns",
                index,
                row.len(),
                columns.len()
            )));
        }

        Ok(Self { columns, rows })
    }

    /// Build a table whose rows are known to match the schema
    ///
    /// **Private** - used by transforms that derive rows from a valid table
    pub(crate) fn from_rows_unchecked(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self { columns, rows }
    }

    /// Build a table from named columns of equal length
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> Result<Self, TransformError> {
        let height = columns.first().map(|(_, values)| values.len()).unwrap_or(0);

        if let Some((name, values)) = columns.iter().find(|(_, values)| values.len() != height) {
            return Err(TransformError::InvalidArgument(format!(
                "column '{}' has {} values, expected {}",
                name,
                values.len(),
                height
            )));
        }

        let rows = (0..height)
            .map(|i| columns.iter().map(|(_, values)| values[i]).collect())
            .collect();
        let names = columns.into_iter().map(|(name, _)| name).collect();

        Ok(Self::from_rows_unchecked(names, rows))
    }

    /// Column names in schema order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows (timesteps)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Copy out a single column by name
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[index]).collect())
    }

    /// Value at `row` for the named column
    pub fn get(&self, row: usize, name: &str) -> Option<f64> {
        let index = self.column_index(name)?;
        self.rows.get(row).map(|r| r[index])
    }
}

/// A single value per timestep, usually reduced from one or more columns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

impl AsRef<[f64]> for Series {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}
