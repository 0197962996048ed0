use crate::utils::config::REPORT_SCHEMA_VERSION;

/// Display version information
pub fn display_version() {
    println!("perflog v{}", env!("CARGO_PKG_VERSION"));
    println!("Energy Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Resampling, per-core aggregation and energy comparison for periodic telemetry logs.");
}
