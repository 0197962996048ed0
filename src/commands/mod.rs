//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod compare;
pub mod inspect;
pub mod models;
pub mod plot;
pub mod utils;

// Re-export main command functions
pub use compare::{execute_power_comparison, execute_thermal_comparison, ComparisonOutput};
pub use inspect::{execute_inspect, summarize_log, LogSummary};
pub use models::{CompareArgs, EnergyUnit, LogKind, PlotArgs};
pub use plot::{execute_plot, prepare_log, validate_plot_args, PreparedLog};
pub use utils::display_version;
