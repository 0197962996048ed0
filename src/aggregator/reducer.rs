//! Row-wise reduction of column groups.

use super::grouping::{group_columns, Group};
use crate::parser::{Series, Table};
use crate::utils::error::TransformError;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// How the columns of a group collapse into one value per row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceMethod {
    Maximum,
    Sum,
}

impl ReduceMethod {
    /// Apply this reduction to one row's values
    ///
    /// NaN inputs are skipped. The maximum of nothing is NaN, the sum of
    /// nothing is zero.
    pub fn apply(self, values: impl Iterator<Item = f64>) -> f64 {
        let values = values.filter(|v| !v.is_nan());
        match self {
            ReduceMethod::Maximum => values.reduce(f64::max).unwrap_or(f64::NAN),
            ReduceMethod::Sum => values.sum(),
        }
    }
}

impl FromStr for ReduceMethod {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "max" | "maximum" => Ok(ReduceMethod::Maximum),
            "sum" => Ok(ReduceMethod::Sum),
            other => Err(TransformError::InvalidArgument(format!(
                "reduction method must be 'max' or 'sum', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for ReduceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceMethod::Maximum => write!(f, "max"),
            ReduceMethod::Sum => write!(f, "sum"),
        }
    }
}

/// Collapse each group into a single column named by the group key
///
/// **Public** - main entry point for reduction
///
/// Row count and order are unchanged.
///
/// # Errors
/// * `TransformError::InvalidArgument` - a group with no columns
/// * `TransformError::UnknownColumn` - a group names a column the table lacks
pub fn reduce(table: &Table, groups: &[Group], method: ReduceMethod) -> Result<Table, TransformError> {
    let mut indices = Vec::with_capacity(groups.len());
    for group in groups {
        if group.columns.is_empty() {
            return Err(TransformError::InvalidArgument(format!(
                "group '{}' has no columns",
                group.key
            )));
        }

        let group_indices = group
            .columns
            .iter()
            .map(|name| {
                table
                    .column_index(name)
                    .ok_or_else(|| TransformError::UnknownColumn(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        indices.push(group_indices);
    }

    debug!(
        "Reducing {} columns into {} groups by {}",
        table.width(),
        groups.len(),
        method
    );

    let rows = table
        .rows()
        .iter()
        .map(|row| {
            indices
                .iter()
                .map(|cols| method.apply(cols.iter().map(|&c| row[c])))
                .collect()
        })
        .collect();
    let columns = groups.iter().map(|g| g.key.clone()).collect();

    Ok(Table::from_rows_unchecked(columns, rows))
}

/// Group the table's own columns by naming convention, then reduce
pub fn reduce_by_group(table: &Table, method: ReduceMethod) -> Result<Table, TransformError> {
    let groups = group_columns(table.columns());
    reduce(table, &groups, method)
}

/// Reduce every column of each row into one value
pub fn reduce_rows(table: &Table, method: ReduceMethod) -> Series {
    table
        .rows()
        .iter()
        .map(|row| method.apply(row.iter().copied()))
        .collect::<Vec<_>>()
        .into()
}
