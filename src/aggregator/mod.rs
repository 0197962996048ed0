//! Aggregation of periodic log columns.
//!
//! This module handles:
//! - Grouping per-core / per-cluster columns by naming convention
//! - Collapsing groups (or whole rows) by maximum or sum
//! - Integrating power series into total energy

pub mod energy;
pub mod grouping;
pub mod reducer;

// Re-export main functions
pub use energy::{peak, total_energy, total_power_series};
pub use grouping::{classify_column, group_columns, ColumnClass, Group};
pub use reducer::{reduce, reduce_by_group, reduce_rows, ReduceMethod};
