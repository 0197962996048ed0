//! perflog
//!
//! Resampling and aggregation engine for periodic hardware telemetry logs
//! (frequency, power, thermal), with SVG charts and cross-run energy
//! comparison.
//!
//! This crate provides the core implementation for the `perflog` CLI tool.
//!
//! ## Pipeline
//!
//! ```text
//! read_log_gz -> Table -> upsample / downsample -> reduce_by_group -> chart
//!                                   \-> total_power_series -> total_energy / align
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod resample;
pub mod runs;
pub mod utils;
