//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while decoding a periodic log
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read log: {0}")]
    Io(#[from] std::io::Error),

    #[error("Log has no header line")]
    MissingHeader,

    #[error("Duplicate column in header: {0}")]
    DuplicateColumn(String),

    #[error("Line {line}: expected {expected} values, found {found}")]
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}, column '{column}': invalid number '{token}'")]
    InvalidNumber {
        line: usize,
        column: String,
        token: String,
    },
}

/// Errors raised by resampling and reduction
#[derive(Error, Debug, PartialEq)]
pub enum TransformError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

/// Errors that can occur while preparing runs for comparison
#[derive(Error, Debug, PartialEq)]
pub enum RunError {
    #[error("Invalid run spec '{0}': expected folder[:timestep_ms[:label]]")]
    InvalidSpec(String),

    #[error("Invalid timestep in run spec '{spec}': {reason}")]
    InvalidTimestep { spec: String, reason: String },

    #[error("Two runs share the label '{0}'")]
    LabelCollision(String),
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug, PartialEq)]
pub enum ChartError {
    #[error("Nothing to plot")]
    NoData,

    #[error("Series '{label}' has {xs} x values but {ys} y values")]
    LengthMismatch { label: String, xs: usize, ys: usize },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
