//! Configuration and constants for the CLI.

/// Current energy report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Periodic log files written by the simulator, one per telemetry kind
pub const FREQUENCY_LOG: &str = "PeriodicFrequency.log.gz";
pub const POWER_LOG: &str = "PeriodicPower.log.gz";
pub const THERMAL_LOG: &str = "PeriodicThermal.log.gz";

/// Resolution (ms per row) that detail plots are upsampled to
pub const DEFAULT_TARGET_STEP_MS: f64 = 0.1;

/// Upper bound on rows an upsampled table may hold
pub const MAX_UPSAMPLED_ROWS: usize = 50_000_000;

/// Overview plots are only decimated when the source step is below this (ms)
pub const OVERVIEW_THRESHOLD_MS: f64 = 1.0;

/// Timestep assumed for a run given as a bare folder (one row per ms)
pub const DEFAULT_RUN_TIMESTEP_MS: f64 = 1.0;

/// Default directory for rendered charts
pub const DEFAULT_CHART_DIR: &str = "charts";

// Label derivation for run identifiers like "x86_4core+dvfs+run3"
pub const LABEL_DELIMITER: char = '+';
pub const LABEL_WIDTH: usize = 6;

// Chart geometry in pixels
pub const CHART_WIDTH: usize = 1200;
pub const CHART_HEIGHT: usize = 700;
