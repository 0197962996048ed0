//! Run specifications given on the command line.
//!
//! Format: `folder:timestep_ms:label`, or `folder:timestep_ms` to derive the
//! label from the folder name. A bare `folder` derives the label and assumes
//! one row per millisecond.

use crate::runs::label_from_path;
use crate::utils::config::DEFAULT_RUN_TIMESTEP_MS;
use crate::utils::error::RunError;
use std::path::PathBuf;
use std::str::FromStr;

/// A parsed `folder[:timestep[:label]]` argument
#[derive(Debug, Clone, PartialEq)]
pub struct RunSpec {
    pub folder: PathBuf,
    pub timestep_ms: f64,
    pub label: String,
}

impl RunSpec {
    pub fn parse(spec: &str) -> Result<Self, RunError> {
        let parts: Vec<&str> = spec.split(':').collect();

        let (folder, timestep, label) = match parts.as_slice() {
            [folder] => (*folder, None, None),
            [folder, timestep] => (*folder, Some(*timestep), None),
            [folder, timestep, label] => (*folder, Some(*timestep), Some(*label)),
            _ => return Err(RunError::InvalidSpec(spec.to_string())),
        };

        if folder.is_empty() {
            return Err(RunError::InvalidSpec(spec.to_string()));
        }

        let timestep_ms = match timestep {
            Some(timestep) => timestep.trim().parse::<f64>().map_err(|e| RunError::InvalidTimestep {
                spec: spec.to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_RUN_TIMESTEP_MS,
        };

        if !timestep_ms.is_finite() || timestep_ms <= 0.0 {
            return Err(RunError::InvalidTimestep {
                spec: spec.to_string(),
                reason: "timestep must be a positive number".to_string(),
            });
        }

        let folder = PathBuf::from(folder);
        let label = match label {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => label_from_path(&folder),
        };

        Ok(Self {
            folder,
            timestep_ms,
            label,
        })
    }
}

impl FromStr for RunSpec {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
