//! Multi-run comparison support.

pub mod aligner;
pub mod label;

pub use aligner::{align, align_with_policy, time_axis, AlignedRun, AlignedRuns, CollisionPolicy, Run};
pub use label::{label_from_identifier, label_from_path};
