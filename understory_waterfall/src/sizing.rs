// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deriving a column count from a desired column size.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::LayoutError;

/// Strategy for turning a desired column size into a column count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColumnSizing {
    /// As many columns as fit without going below the desired size.
    #[default]
    MinSize,
    /// The column count whose resulting size is closest to the desired size.
    SuitableSize,
}

impl ColumnSizing {
    /// Column count for `available` space and a `desired` column size.
    ///
    /// Always returns at least one column. `desired` must be finite and
    /// strictly positive.
    pub fn column_count(self, available: f64, desired: f64) -> Result<usize, LayoutError> {
        if !(desired.is_finite() && desired > 0.0) {
            return Err(LayoutError::InvalidColumnSize);
        }
        let available = available.max(0.0);
        Ok(match self {
            Self::MinSize => count_for_min_size(available, desired),
            Self::SuitableSize => count_for_suitable_size(available, desired),
        })
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Both operands are non-negative and finite; the quotient is floored first"
)]
fn whole_columns(available: f64, desired: f64) -> usize {
    (available / desired).floor() as usize
}

fn count_for_min_size(available: f64, desired: f64) -> usize {
    whole_columns(available, desired).max(1)
}

#[allow(
    clippy::cast_precision_loss,
    reason = "Column counts are small; exact representation is not a concern"
)]
fn count_for_suitable_size(available: f64, desired: f64) -> usize {
    let span = whole_columns(available, desired);
    if span == 0 {
        return 1;
    }
    let deviation = |n: usize| (1.0 - (available / n as f64).floor() / desired).abs();
    if deviation(span) < deviation(span + 1) {
        span
    } else {
        span + 1
    }
}

#[cfg(test)]
mod tests {
    use super::ColumnSizing;
    use crate::LayoutError;

    #[test]
    fn min_size_never_goes_below_desired() {
        assert_eq!(ColumnSizing::MinSize.column_count(1000.0, 300.0), Ok(3));
        assert_eq!(ColumnSizing::MinSize.column_count(100.0, 300.0), Ok(1));
        assert_eq!(ColumnSizing::MinSize.column_count(-5.0, 300.0), Ok(1));
    }

    #[test]
    fn suitable_size_picks_closest_count() {
        // 3 columns of 333 (dev 0.11) vs 4 of 250 (dev 0.17).
        assert_eq!(ColumnSizing::SuitableSize.column_count(1000.0, 300.0), Ok(3));
        // 3 columns of 366 (dev 0.22) vs 4 of 275 (dev 0.08).
        assert_eq!(ColumnSizing::SuitableSize.column_count(1100.0, 300.0), Ok(4));
        assert_eq!(ColumnSizing::SuitableSize.column_count(100.0, 300.0), Ok(1));
    }

    #[test]
    fn invalid_desired_size_is_rejected() {
        assert_eq!(
            ColumnSizing::MinSize.column_count(100.0, 0.0),
            Err(LayoutError::InvalidColumnSize)
        );
        assert_eq!(
            ColumnSizing::SuitableSize.column_count(100.0, f64::NAN),
            Err(LayoutError::InvalidColumnSize)
        );
    }
}
