//! Time-resolution changes for periodic logs.
//!
//! - `upsample` replicates rows to reach a finer timestep
//! - `downsample` decimates fixed-size chunks while keeping rising and
//!   falling extrema visible

pub mod downsample;
pub mod upsample;

pub use downsample::{downsample, overview_group_size};
pub use upsample::{upsample, upsample_factor};
