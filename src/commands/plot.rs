//! Plot command implementation.
//!
//! The plot command, for each periodic log in a run folder:
//! 1. Decodes the log
//! 2. Changes its resolution (upsample for detail, decimate for overview)
//! 3. Collapses per-core columns (detail only)
//! 4. Renders and writes a line chart

use super::models::{LogKind, PlotArgs};
use crate::aggregator::reduce_by_group;
use crate::chart::{render_line_chart, ChartConfig, ChartSeries};
use crate::output::write_chart;
use crate::parser::{read_log_gz, Table};
use crate::resample::{downsample, overview_group_size, upsample, upsample_factor};
use crate::utils::config::OVERVIEW_THRESHOLD_MS;
use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// A log after resampling and reduction, ready to plot
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedLog {
    pub table: Table,

    /// Time between rows of `table`, in ms
    pub step_ms: f64,
}

/// Execute the plot command
///
/// **Public** - main entry point called from main.rs
///
/// A missing log is skipped with a warning and a log that fails to decode or
/// transform is reported, so one bad file never stops the others.
///
/// # Returns
/// Paths of the charts that were written
pub fn execute_plot(args: &PlotArgs) -> Result<Vec<PathBuf>> {
    let start_time = Instant::now();
    validate_plot_args(args)?;

    info!(
        "Plotting logs in {} ({} ms per row, {} mode)",
        args.folder.display(),
        args.timescale_ms,
        if args.overview { "overview" } else { "detail" }
    );

    let mut written = Vec::new();
    for kind in LogKind::ALL {
        let path = args.folder.join(kind.file_name());
        if !path.exists() {
            warn!("File not found: {}", path.display());
            continue;
        }

        info!("Processing {}", kind.file_name());
        match plot_log(kind, &path, args) {
            Ok(chart_path) => written.push(chart_path),
            Err(e) => error!("Skipping {}: {:#}", path.display(), e),
        }
    }

    if written.is_empty() {
        info!("No charts produced for {}", args.folder.display());
    }

    info!("Plot completed in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(written)
}

/// Decode, prepare, render and write one log
///
/// **Private** - internal helper for execute_plot
fn plot_log(kind: LogKind, path: &Path, args: &PlotArgs) -> Result<PathBuf> {
    let table = read_log_gz(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let prepared = prepare_log(kind, &table, args)?;

    let series = ChartSeries::from_table(&prepared.table, prepared.step_ms);
    let config = ChartConfig::new(kind.name()).with_y_label(kind.name());
    let svg = render_line_chart(&series, &config).context("Failed to render chart")?;

    let chart_path = args.out_dir.join(format!("{}.svg", kind.name()));
    write_chart(&svg, &chart_path).context("Failed to write chart")?;

    Ok(chart_path)
}

/// Bring a decoded log to plotting resolution
///
/// **Public** - exposed so the transformation can be checked without files
///
/// Overview mode decimates logs finer than 1 ms to roughly 1 ms per row and
/// leaves columns as they are. Detail mode upsamples logs coarser than the
/// target step, then collapses per-core columns for power and thermal logs.
pub fn prepare_log(kind: LogKind, table: &Table, args: &PlotArgs) -> Result<PreparedLog> {
    if args.overview {
        if args.timescale_ms < OVERVIEW_THRESHOLD_MS {
            let group_size = overview_group_size(args.timescale_ms)?;
            let table = downsample(table, group_size)?;
            info!("Custom downsampled every {} timepoints.", group_size);
            return Ok(PreparedLog {
                table,
                step_ms: group_size as f64 * args.timescale_ms,
            });
        }

        return Ok(PreparedLog {
            table: table.clone(),
            step_ms: args.timescale_ms,
        });
    }

    let (table, step_ms) = if args.timescale_ms > args.target_step_ms {
        let factor = upsample_factor(args.timescale_ms, args.target_step_ms)?;
        let table = upsample(table, args.timescale_ms, args.target_step_ms)?;
        info!(
            "Upsampled {} by duplicating each row {} times.",
            kind.name(),
            factor
        );
        (table, args.target_step_ms)
    } else {
        (table.clone(), args.timescale_ms)
    };

    let table = match kind.group_reduction() {
        Some(method) => {
            let reduced = reduce_by_group(&table, method)?;
            info!(
                "Reduced {} data by taking {} per core group per timestep.",
                kind.name(),
                method
            );
            reduced
        }
        None => table,
    };

    debug!("{} prepared: {} rows x {} columns", kind.name(), table.len(), table.width());
    Ok(PreparedLog { table, step_ms })
}

/// Validate plot arguments
///
/// **Public** - can be called before execute_plot for early validation
pub fn validate_plot_args(args: &PlotArgs) -> Result<()> {
    if !(args.timescale_ms.is_finite() && args.timescale_ms > 0.0) {
        anyhow::bail!("timescale must be a positive number of milliseconds");
    }

    if !(args.target_step_ms.is_finite() && args.target_step_ms > 0.0) {
        anyhow::bail!("target step must be a positive number of milliseconds");
    }

    if !args.folder.is_dir() {
        anyhow::bail!("Folder does not exist: {}", args.folder.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_core_table() -> Table {
        Table::from_columns(vec![
            ("Core_0_A".to_string(), vec![1.0, 5.0]),
            ("Core_0_B".to_string(), vec![2.0, 3.0]),
            ("Uncore".to_string(), vec![0.5, 0.5]),
        ])
        .unwrap()
    }

    #[test]
    fn test_prepare_detail_upsamples_and_reduces() {
        let args = PlotArgs {
            timescale_ms: 0.3,
            ..Default::default()
        };

        let prepared = prepare_log(LogKind::Power, &per_core_table(), &args).unwrap();

        assert_eq!(prepared.step_ms, 0.1);
        assert_eq!(prepared.table.columns(), &["Core_0".to_string(), "Uncore".to_string()][..]);
        assert_eq!(prepared.table.len(), 6);
        assert_eq!(prepared.table.column("Core_0"), Some(vec![3.0, 3.0, 3.0, 8.0, 8.0, 8.0]));
    }

    #[test]
    fn test_prepare_detail_frequency_keeps_columns() {
        let args = PlotArgs {
            timescale_ms: 0.1,
            ..Default::default()
        };

        let prepared = prepare_log(LogKind::Frequency, &per_core_table(), &args).unwrap();

        assert_eq!(prepared.table, per_core_table());
    }

    #[test]
    fn test_prepare_overview_downsamples() {
        let args = PlotArgs {
            timescale_ms: 0.5,
            overview: true,
            ..Default::default()
        };

        let prepared = prepare_log(LogKind::Thermal, &per_core_table(), &args).unwrap();

        assert_eq!(prepared.table.len(), 1);
        assert_eq!(prepared.table.width(), 3);
        assert_eq!(prepared.step_ms, 1.0);
    }

    #[test]
    fn test_prepare_detail_rejects_tiny_target_step() {
        let args = PlotArgs {
            timescale_ms: 1.0,
            target_step_ms: 1e-300,
            ..Default::default()
        };

        assert!(prepare_log(LogKind::Power, &per_core_table(), &args).is_err());
    }

    #[test]
    fn test_validate_plot_args() {
        let temp_dir = tempfile::tempdir().unwrap();
        let valid = PlotArgs {
            folder: temp_dir.path().to_path_buf(),
            ..Default::default()
        };
        assert!(validate_plot_args(&valid).is_ok());

        let bad_timescale = PlotArgs {
            timescale_ms: 0.0,
            ..valid.clone()
        };
        assert!(validate_plot_args(&bad_timescale).is_err());

        let missing = PlotArgs {
            folder: temp_dir.path().join("absent"),
            ..valid
        };
        assert!(validate_plot_args(&missing).is_err());
    }
}
