//! Multi-run comparison commands.
//!
//! - `power`: total power over time per run, plus integrated energy
//! - `thermal`: hottest sensor over time per run
//!
//! Each run is a `folder[:timestep_ms[:label]]` spec. Invalid specs, missing
//! logs and undecodable logs are skipped with a warning; an empty result is
//! reported, not treated as a failure.

use super::models::CompareArgs;
use crate::aggregator::{peak, reduce_rows, total_energy, total_power_series, ReduceMethod};
use crate::chart::{render_bar_chart, render_line_chart, ChartConfig, ChartSeries};
use crate::output::{write_chart, write_report, EnergyReport, RunEnergy};
use crate::parser::{read_log_gz, RunSpec, Series, Table};
use crate::runs::{align_with_policy, AlignedRuns, CollisionPolicy, Run};
use crate::utils::config::{POWER_LOG, THERMAL_LOG};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Outcome of a comparison that produced charts
#[derive(Debug, Clone)]
pub struct ComparisonOutput {
    /// Chart files written, in the order they were produced
    pub charts: Vec<PathBuf>,

    /// Energy totals (power comparison only)
    pub report: Option<EnergyReport>,
}

/// Execute the power comparison
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// `None` when no run had usable power data
pub fn execute_power_comparison(args: &CompareArgs) -> Result<Option<ComparisonOutput>> {
    let runs = load_runs(&args.specs, POWER_LOG, "power", total_power_series);
    let aligned = align_with_policy(runs, collision_policy(args))
        .context("Failed to align power runs")?;

    if aligned.is_empty() {
        info!("No valid power data found.");
        return Ok(None);
    }

    let line_path = args.out_dir.join("power_comparison.svg");
    let line_config = ChartConfig::new("Power Over Time").with_y_label("Power [W]");
    write_run_chart(&aligned, &line_config, &line_path)?;

    let report = energy_report(&aligned, args);
    for run in &report.runs {
        info!("{}: {:.3} {}", run.label, run.energy, report.energy_unit);
    }

    let bars: Vec<(String, f64)> = report
        .runs
        .iter()
        .map(|r| (r.label.clone(), r.energy))
        .collect();
    let bar_config = ChartConfig::new("Energy Usage")
        .with_x_label("")
        .with_y_label(format!("Energy [{}]", report.energy_unit));
    let bar_svg = render_bar_chart(&bars, &bar_config).context("Failed to render energy chart")?;
    let bar_path = args.out_dir.join("energy_comparison.svg");
    write_chart(&bar_svg, &bar_path).context("Failed to write energy chart")?;

    if let Some(report_path) = &args.report {
        write_report(&report, report_path).context("Failed to write energy report")?;
        info!("✓ Energy report written to: {}", report_path.display());
    }

    Ok(Some(ComparisonOutput {
        charts: vec![line_path, bar_path],
        report: Some(report),
    }))
}

/// Execute the thermal comparison
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// `None` when no run had usable thermal data
pub fn execute_thermal_comparison(args: &CompareArgs) -> Result<Option<ComparisonOutput>> {
    let runs = load_runs(&args.specs, THERMAL_LOG, "thermal", |table| {
        reduce_rows(table, ReduceMethod::Maximum)
    });
    let aligned = align_with_policy(runs, collision_policy(args))
        .context("Failed to align thermal runs")?;

    if aligned.is_empty() {
        info!("No valid thermal data found.");
        return Ok(None);
    }

    let path = args.out_dir.join("max_thermal_comparison.svg");
    let config = ChartConfig::new("Maximum Temperature Over Time").with_y_label("Max Temperature [C]");
    write_run_chart(&aligned, &config, &path)?;

    Ok(Some(ComparisonOutput {
        charts: vec![path],
        report: None,
    }))
}

fn collision_policy(args: &CompareArgs) -> CollisionPolicy {
    if args.strict_labels {
        CollisionPolicy::Reject
    } else {
        CollisionPolicy::Overwrite
    }
}

/// Parse specs and load one series per usable run
///
/// **Private** - skips anything that cannot be read, with a warning
fn load_runs(
    specs: &[String],
    log_file: &str,
    what: &str,
    extract: impl Fn(&Table) -> Series,
) -> Vec<Run> {
    let mut runs = Vec::new();

    for entry in specs {
        let spec = match RunSpec::parse(entry) {
            Ok(spec) => spec,
            Err(e) => {
                warn!("{}, skipping.", e);
                continue;
            }
        };

        let path = spec.folder.join(log_file);
        if !path.exists() {
            warn!("File not found: {}, skipping.", path.display());
            continue;
        }

        info!("Reading {} data from: {}", what, path.display());
        match read_log_gz(&path) {
            Ok(table) => {
                let series = extract(&table);
                debug!("{}: {} samples every {} ms", spec.label, series.len(), spec.timestep_ms);
                runs.push(Run::new(spec.label, spec.timestep_ms, series));
            }
            Err(e) => warn!("Failed to read {}: {}, skipping.", path.display(), e),
        }
    }

    runs
}

/// Integrate every aligned run in the requested unit
///
/// **Private** - unit conversion happens here, not in the integrator
fn energy_report(aligned: &AlignedRuns, args: &CompareArgs) -> EnergyReport {
    let runs = aligned
        .iter()
        .map(|run| {
            let timestep = args.energy_unit.timestep_from_ms(run.timestep);
            RunEnergy {
                label: run.label.clone(),
                timestep_ms: run.timestep,
                samples: run.values.len(),
                energy: total_energy(&run.values, timestep),
                peak_power: peak(&run.values),
            }
        })
        .collect();

    EnergyReport::new(args.energy_unit.symbol(), runs)
}

fn write_run_chart(aligned: &AlignedRuns, config: &ChartConfig, path: &Path) -> Result<()> {
    let series: Vec<ChartSeries> = aligned.iter().map(ChartSeries::from).collect();
    let svg = render_line_chart(&series, config)
        .with_context(|| format!("Failed to render {}", config.title))?;
    write_chart(&svg, path).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Saved comparison chart to: {}", path.display());
    Ok(())
}
