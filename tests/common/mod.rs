//! Shared fixtures for integration tests.

#![allow(dead_code)]

use flate2::write::GzEncoder;
use flate2::Compression;
use perflog::parser::Table;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::path::Path;

/// Tab-separated log text for a table
pub fn to_log_text(columns: &[&str], rows: &[Vec<f64>]) -> String {
    let mut text = columns.join("\t");
    text.push('\n');
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        text.push_str(&line.join("\t"));
        text.push('\n');
    }
    text
}

/// Write raw text gzip-compressed
pub fn write_gz(path: &Path, text: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

/// Write a table as a periodic `.log.gz`
pub fn write_log(path: &Path, columns: &[&str], rows: &[Vec<f64>]) {
    write_gz(path, &to_log_text(columns, rows));
}

/// Columns as the simulator names them in PeriodicPower logs
pub const POWER_COLUMNS: [&str; 5] = [
    "Core_0_Dynamic",
    "Core_0_Static",
    "Core_1_Dynamic",
    "Core_1_Static",
    "Uncore",
];

/// Columns as the simulator names them in PeriodicThermal logs
pub const THERMAL_COLUMNS: [&str; 4] = ["Core_0", "Core_1", "Core_2", "Core_3"];

/// Deterministic pseudo-random rows in `[low, high)`
pub fn seeded_rows(seed: u64, rows: usize, width: usize, low: f64, high: f64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|_| (0..width).map(|_| rng.random_range(low..high)).collect())
        .collect()
}

pub fn table(columns: &[&str], rows: Vec<Vec<f64>>) -> Table {
    Table::new(columns.iter().map(|c| c.to_string()).collect(), rows).unwrap()
}
