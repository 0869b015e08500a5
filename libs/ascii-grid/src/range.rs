//! # Value Range
//!
//! Minimum and maximum over the valid cells of a grid, and the normalization
//! of a cell value into an amount in `[0, 1]`.

use serde::{Deserialize, Serialize};

/// Closed range of valid cell values.
///
/// Only exists when the grid has at least one valid cell, so `min <= max`
/// always holds.
///
/// # Example
///
/// ```rust
/// use ascii_grid::ValueRange;
///
/// let range = ValueRange::new(10.0, 30.0);
/// assert_eq!(range.amount(20.0), 0.5);
/// assert_eq!(range.amount(99.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Smallest valid value.
    pub min: f64,
    /// Largest valid value.
    pub max: f64,
}

impl ValueRange {
    /// Creates a range, ordering the bounds if they arrive swapped.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Width of the range.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when every valid cell holds the same value.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    /// Normalizes `value` into `[0, 1]`.
    ///
    /// A degenerate range maps everything to 0, as does a value that yields a
    /// non-finite amount (a NaN cell).
    ///
    /// # Example
    ///
    /// ```rust
    /// use ascii_grid::ValueRange;
    ///
    /// let flat = ValueRange::new(5.0, 5.0);
    /// assert_eq!(flat.amount(5.0), 0.0);
    /// assert_eq!(ValueRange::new(0.0, 1.0).amount(f64::NAN), 0.0);
    /// ```
    pub fn amount(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let amount = (value - self.min) / self.span();
        if amount.is_nan() {
            0.0
        } else {
            amount.clamp(0.0, 1.0)
        }
    }
}

/// Running min/max fold used while parsing.
///
/// The first valid value seeds both bounds. NaN values are skipped so a
/// single malformed token cannot poison the range.
///
/// # Example
///
/// ```rust
/// use ascii_grid::RangeAccumulator;
///
/// let mut acc = RangeAccumulator::default();
/// for v in [3.0, f64::NAN, -2.0, 8.0] {
///     acc.fold(v);
/// }
/// let range = acc.finish().unwrap();
/// assert_eq!((range.min, range.max), (-2.0, 8.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeAccumulator {
    range: Option<ValueRange>,
}

impl RangeAccumulator {
    /// Folds one valid value into the running bounds.
    pub fn fold(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.range = Some(match self.range {
            None => ValueRange {
                min: value,
                max: value,
            },
            Some(range) => ValueRange {
                min: range.min.min(value),
                max: range.max.max(value),
            },
        });
    }

    /// The accumulated range, or `None` if no value was folded.
    pub fn finish(self) -> Option<ValueRange> {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_endpoints() {
        let range = ValueRange::new(-10.0, 10.0);
        assert_eq!(range.amount(-10.0), 0.0);
        assert_eq!(range.amount(10.0), 1.0);
        assert_eq!(range.amount(0.0), 0.5);
    }

    #[test]
    fn test_amount_clamps_outside_values() {
        let range = ValueRange::new(0.0, 4.0);
        assert_eq!(range.amount(-1.0), 0.0);
        assert_eq!(range.amount(5.0), 1.0);
    }

    #[test]
    fn test_degenerate_range_yields_zero() {
        let range = ValueRange::new(7.0, 7.0);
        assert!(range.is_degenerate());
        assert_eq!(range.amount(7.0), 0.0);
        assert_eq!(range.amount(100.0), 0.0);
    }

    #[test]
    fn test_new_orders_bounds() {
        let range = ValueRange::new(9.0, 1.0);
        assert_eq!(range.min, 1.0);
        assert_eq!(range.max, 9.0);
    }

    #[test]
    fn test_accumulator_empty() {
        assert_eq!(RangeAccumulator::default().finish(), None);
    }

    #[test]
    fn test_accumulator_first_value_seeds_both_bounds() {
        let mut acc = RangeAccumulator::default();
        acc.fold(42.0);
        assert_eq!(acc.finish(), Some(ValueRange::new(42.0, 42.0)));
    }

    #[test]
    fn test_accumulator_only_nan_stays_empty() {
        let mut acc = RangeAccumulator::default();
        acc.fold(f64::NAN);
        assert_eq!(acc.finish(), None);
    }
}
