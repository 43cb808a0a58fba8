//! Weighted Moving Average (WMA) indicator.
//!
//! The WMA assigns linearly decreasing weights to older observations: weight
//! `period` on the newest, down to weight `1` on the oldest.
//!
//! # Formula
//!
//! ```text
//! WMA[i] = (n·x[i] + (n-1)·x[i-1] + ... + 1·x[i-n+1]) / (n·(n+1)/2)
//! ```
//!
//! Each window is evaluated by summing the cumulative sums of the window taken
//! newest-first: the newest value appears in all `n` partial sums, the oldest
//! in one, which reproduces the linear weights exactly.
//!
//! # Example
//!
//! ```
//! use ta_series::indicators::wma::wma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = wma(&data, 3).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! // (1×1 + 2×2 + 3×3) / 6
//! assert!((result[2] - 14.0 / 6.0).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::kernels::rolling::{rolling_apply, rolling_lookback, rolling_min_len};
use crate::table::{PriceTable, CLOSE};
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback period for WMA (`period - 1`).
#[inline]
#[must_use]
pub const fn wma_lookback(period: usize) -> usize {
    rolling_lookback(period)
}

/// Returns the minimum input length that yields a defined WMA value.
#[inline]
#[must_use]
pub const fn wma_min_len(period: usize) -> usize {
    rolling_min_len(period)
}

/// Normalized WMA weights, oldest first. They sum to one.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
///
/// ```
/// use ta_series::indicators::wma::wma_weights;
///
/// let weights: Vec<f64> = wma_weights(3).unwrap();
/// assert_eq!(weights, vec![1.0 / 6.0, 2.0 / 6.0, 3.0 / 6.0]);
/// ```
pub fn wma_weights<T: SeriesElement>(period: usize) -> Result<Vec<T>> {
    validate_period(period, "period")?;
    let total = weight_total::<T>(period)?;
    (1..=period)
        .map(|w| -> Result<T> { Ok(T::from_usize(w)? / total) })
        .collect()
}

/// Computes the Weighted Moving Average of a series.
///
/// The first `period - 1` values are NaN, as is any window containing a NaN.
/// A window of identical values yields that value exactly.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
#[must_use = "this returns a Result with the WMA values, which should be used"]
pub fn wma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, "period")?;
    let total = weight_total::<T>(period)?;

    rolling_apply(data, period, |window| {
        let first = window[0];
        if window.iter().all(|&v| v == first) {
            return first;
        }
        let mut running = T::zero();
        let mut weighted = T::zero();
        for &value in window.iter().rev() {
            running = running + value;
            weighted = weighted + running;
        }
        weighted / total
    })
}

/// Computes the WMA of a named column of a price table.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::MissingColumn` if the table has no such column
pub fn weighted_moving_average<T: SeriesElement>(
    table: &PriceTable<T>,
    period: usize,
    column: &str,
) -> Result<Vec<T>> {
    validate_period(period, "period")?;
    wma(table.column(column)?, period)
}

/// `n·(n+1)/2`
fn weight_total<T: SeriesElement>(period: usize) -> Result<T> {
    let n = T::from_usize(period)?;
    Ok(n * (n + T::one()) / T::two())
}

/// WMA configuration with defaults (period 10, `Close` column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wma {
    period: usize,
    column: String,
}

impl Default for Wma {
    fn default() -> Self {
        Self {
            period: 10,
            column: CLOSE.to_string(),
        }
    }
}

impl Wma {
    /// Creates a WMA configuration with the default period (10) and column (`Close`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window length.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the column read by [`Wma::compute_table`].
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Computes the WMA of a series.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the period is zero.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        wma(data, self.period)
    }

    /// Computes the WMA of the configured table column.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` or `Error::MissingColumn`.
    pub fn compute_table<T: SeriesElement>(&self, table: &PriceTable<T>) -> Result<Vec<T>> {
        weighted_moving_average(table, self.period, &self.column)
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the column name.
    #[must_use]
    pub fn get_column(&self) -> &str {
        &self.column
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, EPSILON};

    /// Linear weights applied directly, newest weight `n`.
    fn wma_direct(data: &[f64], period: usize) -> Vec<f64> {
        let denom = (period * (period + 1)) as f64 / 2.0;
        (0..data.len())
            .map(|i| {
                if i + 1 < period {
                    return f64::NAN;
                }
                (0..period)
                    .map(|k| (period - k) as f64 * data[i - k])
                    .sum::<f64>()
                    / denom
            })
            .collect()
    }

    #[test]
    fn test_wma_basic() {
        let data = vec![10.0_f64, 11.0, 12.0, 13.0, 14.0];
        let result = wma(&data, 3).unwrap();
        // (10×1 + 11×2 + 12×3) / 6
        assert!(approx_eq(result[2], 68.0 / 6.0, EPSILON));
        assert!(approx_eq(result[4], (12.0 + 26.0 + 42.0) / 6.0, EPSILON));
    }

    #[test]
    fn test_cumulative_sum_form_matches_linear_weights() {
        let data = vec![
            44.34_f64, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89,
            46.03, 45.61, 46.28, 46.28, 46.00,
        ];
        for period in 1..=8 {
            let result = wma(&data, period).unwrap();
            let expected = wma_direct(&data, period);
            for i in 0..data.len() {
                assert!(
                    approx_eq(result[i], expected[i], 1e-10),
                    "period {period}, index {i}: {} vs {}",
                    result[i],
                    expected[i]
                );
            }
        }
    }

    #[test]
    fn test_wma_weights_sum_to_one() {
        for period in 1..=50 {
            let weights: Vec<f64> = wma_weights(period).unwrap();
            let total: f64 = weights.iter().sum();
            assert!(approx_eq(total, 1.0, 1e-12), "period {period}");
            assert!(weights.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_wma_constant_series() {
        for value in [7.25_f64, 0.1, 0.7] {
            let result = wma(&[value; 12], 5).unwrap();
            assert!(result[4..].iter().all(|&v| v == value));
        }
    }

    #[test]
    fn test_wma_nan_window() {
        let data = vec![1.0_f64, f64::NAN, 3.0, 4.0, 5.0];
        let result = wma(&data, 2).unwrap();
        assert!(result[1].is_nan());
        assert!(result[2].is_nan());
        assert!(approx_eq(result[3], (3.0 + 8.0) / 3.0, EPSILON));
    }

    #[test]
    fn test_wma_zero_period() {
        assert!(matches!(wma(&[1.0_f64], 0), Err(Error::InvalidPeriod { .. })));
        assert!(wma_weights::<f64>(0).is_err());
    }

    #[test]
    fn test_weighted_moving_average_table() {
        let table = PriceTable::from_close(vec![1.0_f64, 2.0, 3.0]);
        let result = weighted_moving_average(&table, 3, CLOSE).unwrap();
        assert!(approx_eq(result[2], 14.0 / 6.0, EPSILON));
        assert_eq!(Wma::new().period(3).compute_table(&table).unwrap()[2], result[2]);
    }

    #[test]
    fn test_wma_lookback() {
        assert_eq!(wma_lookback(5), 4);
        assert_eq!(wma_min_len(5), 5);
    }
}
