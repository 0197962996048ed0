//! Inspect command: summarize a single periodic log.

use crate::aggregator::{group_columns, Group};
use crate::parser::read_log_gz;
use anyhow::{Context, Result};
use std::path::Path;

/// Shape and column groups of a decoded log
#[derive(Debug, Clone, PartialEq)]
pub struct LogSummary {
    pub rows: usize,
    pub columns: usize,
    pub groups: Vec<Group>,
}

/// Decode a log and describe it
pub fn summarize_log(path: &Path) -> Result<LogSummary> {
    let table = read_log_gz(path).with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(LogSummary {
        rows: table.len(),
        columns: table.width(),
        groups: group_columns(table.columns()),
    })
}

/// Print a summary of one log to stdout
pub fn execute_inspect(path: &Path) -> Result<()> {
    let summary = summarize_log(path)?;

    println!("Log: {}", path.display());
    println!("  Rows:    {}", summary.rows);
    println!("  Columns: {}", summary.columns);
    println!("  Groups:  {}", summary.groups.len());
    for group in &summary.groups {
        println!("    {:<16} {}", group.key, group.columns.join(", "));
    }

    Ok(())
}
