//! Row replication to a finer timestep.

use crate::parser::Table;
use crate::utils::config::MAX_UPSAMPLED_ROWS;
use crate::utils::error::TransformError;
use log::debug;

/// Replication factor needed to go from `source_step_ms` to `target_step_ms`
///
/// # Errors
/// * `TransformError::InvalidArgument` - non-positive steps, or a target
///   coarser than the source
pub fn upsample_factor(source_step_ms: f64, target_step_ms: f64) -> Result<usize, TransformError> {
    if !(source_step_ms.is_finite() && source_step_ms > 0.0) {
        return Err(TransformError::InvalidArgument(format!(
            "source step must be positive, got {}",
            source_step_ms
        )));
    }
    if !(target_step_ms.is_finite() && target_step_ms > 0.0) {
        return Err(TransformError::InvalidArgument(format!(
            "target step must be positive, got {}",
            target_step_ms
        )));
    }
    if target_step_ms > source_step_ms {
        return Err(TransformError::InvalidArgument(format!(
            "cannot upsample from {} ms to a coarser {} ms",
            source_step_ms, target_step_ms
        )));
    }

    let factor = (source_step_ms / target_step_ms).round() as usize;
    if factor < 1 {
        return Err(TransformError::InvalidArgument(format!(
            "upsample factor must be at least 1, got {}",
            factor
        )));
    }

    Ok(factor)
}

/// Repeat every row `round(source / target)` times
///
/// **Public** - used by detail plots to put all logs on a common resolution
///
/// Values are copied as-is, there is no interpolation. Equal steps return
/// the input unchanged.
///
/// # Errors
/// * `TransformError::InvalidArgument` - invalid steps (see [`upsample_factor`]),
///   or a result longer than `MAX_UPSAMPLED_ROWS`
pub fn upsample(
    table: &Table,
    source_step_ms: f64,
    target_step_ms: f64,
) -> Result<Table, TransformError> {
    if source_step_ms == target_step_ms {
        return Ok(table.clone());
    }

    let factor = upsample_factor(source_step_ms, target_step_ms)?;
    debug!(
        "Upsampling {} rows by factor {} ({} ms -> {} ms)",
        table.len(),
        factor,
        source_step_ms,
        target_step_ms
    );

    let total = table
        .len()
        .checked_mul(factor)
        .filter(|&n| n <= MAX_UPSAMPLED_ROWS)
        .ok_or_else(|| {
            TransformError::InvalidArgument(format!(
                "upsampling {} rows by {} exceeds the {} row limit",
                table.len(),
                factor,
                MAX_UPSAMPLED_ROWS
            ))
        })?;

    let mut rows = Vec::with_capacity(total);
    for row in table.rows() {
        rows.extend(std::iter::repeat(row.clone()).take(factor));
    }

    Ok(Table::from_rows_unchecked(table.columns().to_vec(), rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![1.0, 10.0], vec![2.0, 20.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_upsample_replicates_rows() {
        let out = upsample(&sample(), 0.3, 0.1).unwrap();

        assert_eq!(out.len(), 6);
        assert_eq!(out.columns(), sample().columns());
        for k in 0..3 {
            assert_eq!(out.row(k), Some(&[1.0, 10.0][..]));
            assert_eq!(out.row(3 + k), Some(&[2.0, 20.0][..]));
        }
    }

    #[test]
    fn test_upsample_same_step_is_identity() {
        assert_eq!(upsample(&sample(), 0.1, 0.1).unwrap(), sample());
    }

    #[test]
    fn test_upsample_rejects_coarser_target() {
        assert!(matches!(
            upsample(&sample(), 0.1, 1.0),
            Err(TransformError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_upsample_rejects_non_positive_steps() {
        assert!(upsample(&sample(), 0.0, 0.1).is_err());
        assert!(upsample(&sample(), 1.0, -0.1).is_err());
        assert!(upsample(&sample(), f64::NAN, 0.1).is_err());
    }

    #[test]
    fn test_upsample_rejects_oversized_result() {
        assert!(matches!(
            upsample(&sample(), 1.0, 1e-300),
            Err(TransformError::InvalidArgument(_))
        ));
        assert!(matches!(
            upsample(&sample(), 1.0, 1e-8),
            Err(TransformError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_upsample_factor_rounds() {
        assert_eq!(upsample_factor(1.0, 0.1).unwrap(), 10);
        assert_eq!(upsample_factor(0.3, 0.1).unwrap(), 3);
        assert_eq!(upsample_factor(0.12, 0.1).unwrap(), 1);
    }
}
