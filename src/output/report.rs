//! Energy report JSON schema.
//!
//! Written by the `power` command so totals can be compared without
//! re-reading the logs. Schema is versioned to allow future evolution.

use crate::utils::config::REPORT_SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level report written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Unit of every `energy` value (e.g. "J")
    pub energy_unit: String,

    /// One entry per compared run, in comparison order
    pub runs: Vec<RunEnergy>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Energy totals for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunEnergy {
    pub label: String,

    /// Sampling period of the run's power log, in ms
    pub timestep_ms: f64,

    /// Number of power samples integrated
    pub samples: usize,

    /// Integrated energy in `energy_unit`
    pub energy: f64,

    /// Highest total power seen, if any sample was finite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_power: Option<f64>,
}

impl EnergyReport {
    pub fn new(energy_unit: impl Into<String>, runs: Vec<RunEnergy>) -> Self {
        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            energy_unit: energy_unit.into(),
            runs,
            generated_at: Utc::now().to_rfc3339(),
        }
    }

    /// Run with the lowest energy
    pub fn most_efficient(&self) -> Option<&RunEnergy> {
        self.runs
            .iter()
            .filter(|r| r.energy.is_finite())
            .min_by(|a, b| a.energy.total_cmp(&b.energy))
    }
}
