//! perflog CLI
//!
//! Turns periodic frequency, power and thermal logs into charts, and
//! compares power, energy and temperature across runs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use perflog::commands::{
    display_version, execute_inspect, execute_plot, execute_power_comparison,
    execute_thermal_comparison, CompareArgs, EnergyUnit, PlotArgs,
};
use perflog::utils::config::{DEFAULT_CHART_DIR, DEFAULT_TARGET_STEP_MS};

/// perflog - periodic telemetry log charts and run comparison
#[derive(Parser, Debug)]
#[command(name = "perflog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Plot the periodic logs of one run folder
    Plot {
        /// Folder containing the .log.gz files
        folder: PathBuf,

        /// Original timescale in milliseconds per row
        timescale: f64,

        /// Resolution to upsample detail plots to, in ms
        #[arg(long, default_value_t = DEFAULT_TARGET_STEP_MS)]
        target_step: f64,

        /// Decimate fine logs to ~1 ms per point instead of upsampling
        #[arg(long)]
        overview: bool,

        /// Output directory for charts
        #[arg(short, long, env = "PERFLOG_CHART_DIR", default_value = DEFAULT_CHART_DIR)]
        out_dir: PathBuf,
    },

    /// Compare total power over time and energy across runs
    Power {
        /// Runs as folder[:timestep_ms[:label]] (e.g. run1:0.1:1GHz); timestep defaults to 1 ms
        #[arg(required = true)]
        runs: Vec<String>,

        /// Output directory for charts
        #[arg(short, long, env = "PERFLOG_CHART_DIR", default_value = DEFAULT_CHART_DIR)]
        out_dir: PathBuf,

        /// Also write energy totals as JSON
        #[arg(long)]
        report: Option<PathBuf>,

        /// Unit for energy totals
        #[arg(long, value_enum, default_value_t = EnergyUnit::Joules)]
        energy_unit: EnergyUnit,

        /// Fail when two runs share a label
        #[arg(long)]
        strict_labels: bool,
    },

    /// Compare maximum temperature over time across runs
    Thermal {
        /// Runs as folder[:timestep_ms[:label]] (e.g. run1:0.1:1GHz); timestep defaults to 1 ms
        #[arg(required = true)]
        runs: Vec<String>,

        /// Output directory for charts
        #[arg(short, long, env = "PERFLOG_CHART_DIR", default_value = DEFAULT_CHART_DIR)]
        out_dir: PathBuf,

        /// Fail when two runs share a label
        #[arg(long)]
        strict_labels: bool,
    },

    /// Show the shape and column groups of a log file
    Inspect {
        /// Path to a .log.gz file
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Plot {
            folder,
            timescale,
            target_step,
            overview,
            out_dir,
        } => {
            let args = PlotArgs {
                folder,
                timescale_ms: timescale,
                target_step_ms: target_step,
                overview,
                out_dir,
            };
            execute_plot(&args)?;
        }

        Commands::Power {
            runs,
            out_dir,
            report,
            energy_unit,
            strict_labels,
        } => {
            let args = CompareArgs {
                specs: runs,
                out_dir,
                report,
                energy_unit,
                strict_labels,
            };
            execute_power_comparison(&args)?;
        }

        Commands::Thermal {
            runs,
            out_dir,
            strict_labels,
        } => {
            let args = CompareArgs {
                specs: runs,
                out_dir,
                strict_labels,
                ..Default::default()
            };
            execute_thermal_comparison(&args)?;
        }

        Commands::Inspect { file } => {
            execute_inspect(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
