//! Periodic log decoding.
//!
//! Logs are gzip-compressed, tab-separated text: the first line names the
//! columns and every following line holds one decimal per column.

use super::table::Table;
use crate::utils::error::ParseError;
use flate2::read::GzDecoder;
use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read and decode a `.log.gz` file
///
/// **Public** - main entry point for file input
///
/// # Errors
/// * `ParseError::Io` - file missing, unreadable, or not valid gzip/UTF-8
/// * Any error from [`parse_table`]
pub fn read_log_gz(path: impl AsRef<Path>) -> Result<Table, ParseError> {
    let path = path.as_ref();
    debug!("Reading log: {}", path.display());

    let file = File::open(path)?;
    let mut decoder = GzDecoder::new(BufReader::new(file));
    let mut text = String::new();
    decoder.read_to_string(&mut text)?;

    let table = parse_table(&text)?;
    debug!(
        "Decoded {} rows x {} columns from {}",
        table.len(),
        table.width(),
        path.display()
    );

    Ok(table)
}

/// Parse decompressed log text into a table
///
/// **Public** - usable on in-memory text (tests, stdin)
///
/// # Errors
/// * `ParseError::MissingHeader` - empty input
/// * `ParseError::DuplicateColumn` - a column name repeats in the header
/// * `ParseError::TokenCount` - a data line is wider or narrower than the header
/// * `ParseError::InvalidNumber` - a token is not a decimal number
pub fn parse_table(text: &str) -> Result<Table, ParseError> {
    let mut lines = text.lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) if !line.trim().is_empty() => line.trim(),
        _ => return Err(ParseError::MissingHeader),
    };
    let columns = parse_header(header)?;

    let mut rows = Vec::new();
    for (index, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rows.push(parse_row(line, index + 1, &columns)?);
    }

    Ok(Table::from_rows_unchecked(columns, rows))
}

/// Split the header and reject repeated names
///
/// **Private** - internal helper for parse_table
fn parse_header(header: &str) -> Result<Vec<String>, ParseError> {
    let columns: Vec<String> = header.split('\t').map(str::to_string).collect();

    let mut seen = HashSet::with_capacity(columns.len());
    for column in &columns {
        if !seen.insert(column.as_str()) {
            return Err(ParseError::DuplicateColumn(column.clone()));
        }
    }

    Ok(columns)
}

/// Parse one data line against the header
///
/// **Private** - internal helper for parse_table
fn parse_row(line: &str, line_number: usize, columns: &[String]) -> Result<Vec<f64>, ParseError> {
    let tokens: Vec<&str> = line.split('\t').collect();
    if tokens.len() != columns.len() {
        return Err(ParseError::TokenCount {
            line: line_number,
            expected: columns.len(),
            found: tokens.len(),
        });
    }

    tokens
        .iter()
        .zip(columns)
        .map(|(token, column)| {
            token.trim().parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                line: line_number,
                column: column.clone(),
                token: token.to_string(),
            })
        })
        .collect()
}
