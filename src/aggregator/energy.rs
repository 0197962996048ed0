//! Power series integration.
//!
//! Energy is a rectangle sum: every sample is held for one timestep. No unit
//! conversion happens here; a timestep in seconds over watts yields joules,
//! a timestep in milliseconds yields millijoules.

use super::reducer::{reduce_rows, ReduceMethod};
use crate::parser::{Series, Table};

/// Integrate a power series sampled every `timestep`
///
/// **Public** - main entry point for energy calculation
///
/// # Example
/// ```
/// use perflog::aggregator::total_energy;
///
/// assert_eq!(total_energy([1.0, 2.0, 3.0], 0.5), 3.0);
/// ```
pub fn total_energy(power: impl AsRef<[f64]>, timestep: f64) -> f64 {
    power.as_ref().iter().sum::<f64>() * timestep
}

/// Sum every column of a power log into one aggregate series
pub fn total_power_series(table: &Table) -> Series {
    reduce_rows(table, ReduceMethod::Sum)
}

/// Largest finite sample in a series
pub fn peak(series: impl AsRef<[f64]>) -> Option<f64> {
    series
        .as_ref()
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .reduce(f64::max)
}
