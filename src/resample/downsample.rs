//! Trend-aware decimation to a coarser timestep.
//!
//! Rows are cut into consecutive chunks of `group_size`. Each chunk emits a
//! single row where every column takes either the chunk minimum or the chunk
//! maximum: the minimum when the chunk mean falls below the value emitted for
//! that column by the previous chunk, the maximum otherwise. Peaks and troughs
//! therefore survive decimation instead of being averaged away.
//!
//! Note the comparison is a chunk mean against a previously emitted extremum,
//! so applying the fold twice differs from one pass with a larger chunk.

use crate::parser::Table;
use crate::utils::error::TransformError;
use log::debug;

/// Per-column statistics for one chunk
#[derive(Debug, Clone, PartialEq)]
struct ChunkStats {
    mean: Vec<f64>,
    min: Vec<f64>,
    max: Vec<f64>,
}

impl ChunkStats {
    /// NaN samples are skipped; a column with no other sample gets NaN stats
    fn from_chunk(chunk: &[Vec<f64>], width: usize) -> Self {
        let mut sum = vec![0.0; width];
        let mut count = vec![0usize; width];
        let mut min = vec![f64::NAN; width];
        let mut max = vec![f64::NAN; width];

        for row in chunk {
            for (c, &value) in row.iter().enumerate() {
                if value.is_nan() {
                    continue;
                }
                sum[c] += value;
                count[c] += 1;
                // f64::min/max return the other operand when one side is NaN
                min[c] = min[c].min(value);
                max[c] = max[c].max(value);
            }
        }

        let mean = sum
            .into_iter()
            .zip(count)
            .map(|(s, n)| if n == 0 { f64::NAN } else { s / n as f64 })
            .collect();

        Self { mean, min, max }
    }
}

/// Decimate `table` by emitting one row per full chunk of `group_size` rows
///
/// **Public** - used by overview plots
///
/// A trailing chunk shorter than `group_size` is dropped, so the output has
/// `table.len() / group_size` rows and the input schema.
///
/// # Errors
/// * `TransformError::InvalidArgument` - `group_size` is zero
pub fn downsample(table: &Table, group_size: usize) -> Result<Table, TransformError> {
    if group_size < 1 {
        return Err(TransformError::InvalidArgument(
            "group size must be at least 1".to_string(),
        ));
    }

    let width = table.width();
    let chunks = table.rows().chunks_exact(group_size);
    debug!(
        "Downsampling {} rows into {} chunks of {} ({} trailing rows dropped)",
        table.len(),
        chunks.len(),
        group_size,
        chunks.remainder().len()
    );

    // The previously emitted row is threaded through the fold, starting at zero
    let initial = (Vec::with_capacity(chunks.len()), vec![0.0; width]);
    let (rows, _) = chunks.fold(initial, |(mut rows, previous), chunk| {
        let emitted = decimate_chunk(chunk, width, previous);
        rows.push(emitted.clone());
        (rows, emitted)
    });

    Ok(Table::from_rows_unchecked(table.columns().to_vec(), rows))
}

/// Reduce one chunk against the previously emitted row
///
/// **Private** - fold step for downsample; the returned row is both the
/// chunk's output and the accumulator for the next chunk
fn decimate_chunk(chunk: &[Vec<f64>], width: usize, previous: Vec<f64>) -> Vec<f64> {
    let stats = ChunkStats::from_chunk(chunk, width);

    previous
        .iter()
        .enumerate()
        .map(|(c, &prev)| {
            if stats.mean[c] < prev {
                stats.min[c]
            } else {
                stats.max[c]
            }
        })
        .collect()
}

/// Chunk size that brings a `timescale_ms` log to roughly 1 ms per row
///
/// # Errors
/// * `TransformError::InvalidArgument` - non-positive timescale
pub fn overview_group_size(timescale_ms: f64) -> Result<usize, TransformError> {
    if !(timescale_ms.is_finite() && timescale_ms > 0.0) {
        return Err(TransformError::InvalidArgument(format!(
            "timescale must be positive, got {}",
            timescale_ms
        )));
    }

    Ok(((1.0 / timescale_ms).round() as usize).max(1))
}
