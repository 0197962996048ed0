//! Log parsing and input data types.
//!
//! This module handles:
//! - Decoding gzip tab-separated periodic logs
//! - The `Table` / `Series` data model
//! - Parsing run specifications from the command line

pub mod log_reader;
pub mod run_spec;
pub mod table;

// Re-export main types
pub use log_reader::{parse_table, read_log_gz};
pub use run_spec::RunSpec;
pub use table::{Series, Table};
