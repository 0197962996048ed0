use crate::aggregator::ReduceMethod;
use crate::utils::config::{
    DEFAULT_CHART_DIR, DEFAULT_TARGET_STEP_MS, FREQUENCY_LOG, POWER_LOG, THERMAL_LOG,
};
use clap::ValueEnum;
use std::path::PathBuf;

/// The periodic logs written for every simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Frequency,
    Power,
    Thermal,
}

impl LogKind {
    pub const ALL: [LogKind; 3] = [LogKind::Frequency, LogKind::Power, LogKind::Thermal];

    pub fn file_name(self) -> &'static str {
        match self {
            LogKind::Frequency => FREQUENCY_LOG,
            LogKind::Power => POWER_LOG,
            LogKind::Thermal => THERMAL_LOG,
        }
    }

    /// Chart title and file stem
    pub fn name(self) -> &'static str {
        match self {
            LogKind::Frequency => "PeriodicFrequency",
            LogKind::Power => "PeriodicPower",
            LogKind::Thermal => "PeriodicThermal",
        }
    }

    /// How per-core columns collapse in detail plots; frequency stays per column
    pub fn group_reduction(self) -> Option<ReduceMethod> {
        match self {
            LogKind::Frequency => None,
            LogKind::Power => Some(ReduceMethod::Sum),
            LogKind::Thermal => Some(ReduceMethod::Maximum),
        }
    }
}

/// Arguments for the plot command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct PlotArgs {
    /// Folder holding the periodic logs
    pub folder: PathBuf,

    /// Sampling period of the logs, in ms
    pub timescale_ms: f64,

    /// Resolution detail plots are upsampled to, in ms
    pub target_step_ms: f64,

    /// Decimate fine logs to ~1 ms per point instead of upsampling
    pub overview: bool,

    /// Where charts are written
    pub out_dir: PathBuf,
}

impl Default for PlotArgs {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("."),
            timescale_ms: 1.0,
            target_step_ms: DEFAULT_TARGET_STEP_MS,
            overview: false,
            out_dir: PathBuf::from(DEFAULT_CHART_DIR),
        }
    }
}

/// Unit the power comparison reports energy in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EnergyUnit {
    /// Joules (W x s)
    #[default]
    Joules,
    /// Millijoules (W x ms)
    Millijoules,
}

impl EnergyUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::Joules => "J",
            EnergyUnit::Millijoules => "mJ",
        }
    }

    /// Convert a timestep in ms into the time unit this energy unit implies
    pub fn timestep_from_ms(self, timestep_ms: f64) -> f64 {
        match self {
            EnergyUnit::Joules => timestep_ms / 1000.0,
            EnergyUnit::Millijoules => timestep_ms,
        }
    }
}

/// Arguments for the power and thermal comparison commands
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// Run specs: `folder[:timestep_ms[:label]]`
    pub specs: Vec<String>,

    /// Where charts are written
    pub out_dir: PathBuf,

    /// Optional JSON energy report path (power only)
    pub report: Option<PathBuf>,

    pub energy_unit: EnergyUnit,

    /// Fail when two runs share a label instead of keeping the later one
    pub strict_labels: bool,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            specs: Vec::new(),
            out_dir: PathBuf::from(DEFAULT_CHART_DIR),
            report: None,
            energy_unit: EnergyUnit::default(),
            strict_labels: false,
        }
    }
}
