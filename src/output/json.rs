//! JSON energy report writer.

use super::report::EnergyReport;
use super::{ensure_parent_dir, validate_path};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write an energy report as pretty JSON
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_report(report: &EnergyReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    info!("Writing energy report to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(writer, report)?;

    debug!("Energy report covers {} runs", report.runs.len());
    Ok(())
}

/// Read an energy report back from JSON
///
/// # Errors
/// * `OutputError::WriteFailed` - file read error (I/O errors share one variant)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<EnergyReport, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Reading energy report from: {}", input_path.display());

    let reader = BufReader::new(File::open(input_path)?);
    let report: EnergyReport = serde_json::from_reader(reader)?;

    debug!("Report loaded: version {}, {} runs", report.version, report.runs.len());
    Ok(report)
}
