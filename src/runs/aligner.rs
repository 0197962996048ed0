//! Put independently timed runs on a shared time axis for comparison.
//!
//! Each run keeps its native cadence: sample `i` is plotted at
//! `i * timestep`. Nothing is interpolated or resampled across runs.

use crate::parser::Series;
use crate::utils::error::RunError;
use log::warn;

/// One labelled, uniformly sampled series
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub label: String,
    pub timestep: f64,
    pub series: Series,
}

impl Run {
    pub fn new(label: impl Into<String>, timestep: f64, series: impl Into<Series>) -> Self {
        Self {
            label: label.into(),
            timestep,
            series: series.into(),
        }
    }
}

/// A run with its synthetic time axis
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRun {
    pub label: String,
    pub timestep: f64,
    pub time: Vec<f64>,
    pub values: Vec<f64>,
}

/// What to do when two runs carry the same label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Later run replaces the earlier one in place
    #[default]
    Overwrite,
    /// Fail with `RunError::LabelCollision`
    Reject,
}

/// Aligned runs keyed by label, in first-seen label order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedRuns {
    runs: Vec<AlignedRun>,
}

impl AlignedRuns {
    pub fn get(&self, label: &str) -> Option<&AlignedRun> {
        self.runs.iter().find(|r| r.label == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlignedRun> {
        self.runs.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.runs.iter().map(|r| r.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.runs.iter().position(|r| r.label == label)
    }

    /// Replace a run with the same label in place, or append
    fn upsert(&mut self, run: AlignedRun) {
        match self.position(&run.label) {
            Some(i) => {
                warn!("Run label '{}' seen twice, keeping the later run", run.label);
                self.runs[i] = run;
            }
            None => self.runs.push(run),
        }
    }
}

impl IntoIterator for AlignedRuns {
    type Item = AlignedRun;
    type IntoIter = std::vec::IntoIter<AlignedRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}

/// `[0, step, 2*step, ...]` with `len` entries
pub fn time_axis(len: usize, timestep: f64) -> Vec<f64> {
    (0..len).map(|i| i as f64 * timestep).collect()
}

/// Align runs, letting later duplicates overwrite earlier ones
///
/// **Public** - main entry point for run comparison
pub fn align(runs: impl IntoIterator<Item = Run>) -> AlignedRuns {
    let mut aligned = AlignedRuns::default();
    for run in runs {
        aligned.upsert(to_aligned(run));
    }
    aligned
}

/// Align runs with an explicit collision policy
///
/// # Errors
/// * `RunError::LabelCollision` - under `CollisionPolicy::Reject`
pub fn align_with_policy(
    runs: impl IntoIterator<Item = Run>,
    policy: CollisionPolicy,
) -> Result<AlignedRuns, RunError> {
    let mut aligned = AlignedRuns::default();
    for run in runs {
        if policy == CollisionPolicy::Reject && aligned.position(&run.label).is_some() {
            return Err(RunError::LabelCollision(run.label));
        }
        aligned.upsert(to_aligned(run));
    }
    Ok(aligned)
}

fn to_aligned(run: Run) -> AlignedRun {
    let values = run.series.into_values();
    AlignedRun {
        time: time_axis(values.len(), run.timestep),
        label: run.label,
        timestep: run.timestep,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_axis() {
        assert_eq!(time_axis(4, 0.5), vec![0.0, 0.5, 1.0, 1.5]);
        assert!(time_axis(0, 1.0).is_empty());
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let aligned = align(vec![
            Run::new("a", 1.0, vec![1.0]),
            Run::new("b", 1.0, vec![2.0]),
            Run::new("a", 2.0, vec![3.0, 4.0]),
        ]);

        assert_eq!(aligned.labels(), vec!["a", "b"]);
        let a = aligned.get("a").unwrap();
        assert_eq!(a.values, vec![3.0, 4.0]);
        assert_eq!(a.time, vec![0.0, 2.0]);
    }

    #[test]
    fn test_overwrite_policy_matches_align() {
        let runs = vec![
            Run::new("a", 1.0, vec![1.0]),
            Run::new("b", 0.5, vec![2.0, 2.5]),
            Run::new("a", 2.0, vec![3.0]),
        ];

        let aligned = align_with_policy(runs.clone(), CollisionPolicy::Overwrite).unwrap();
        assert_eq!(aligned, align(runs));
        assert_eq!(aligned.labels(), vec!["a", "b"]);
    }

    #[test]
    fn test_reject_policy() {
        let result = align_with_policy(
            vec![Run::new("a", 1.0, vec![1.0]), Run::new("a", 1.0, vec![2.0])],
            CollisionPolicy::Reject,
        );
        assert_eq!(result, Err(RunError::LabelCollision("a".to_string())));
    }
}
