//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the unweighted mean of the last `period` observations.
//!
//! # Formula
//!
//! ```text
//! SMA[0..period-2] = NaN (insufficient lookback)
//! SMA[i] = (x[i] + x[i-1] + ... + x[i-period+1]) / period
//! ```
//!
//! A window containing a NaN produces NaN.
//!
//! # Example
//!
//! ```
//! use ta_series::indicators::sma::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert_eq!(result[2], 2.0);
//! assert_eq!(result[9], 9.0);
//! ```

use crate::error::Result;
use crate::kernels::rolling::{rolling_lookback, rolling_mean, rolling_min_len};
use crate::table::{PriceTable, CLOSE};
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback period for SMA (`period - 1`).
///
/// ```
/// use ta_series::indicators::sma::sma_lookback;
///
/// assert_eq!(sma_lookback(10), 9);
/// ```
#[inline]
#[must_use]
pub const fn sma_lookback(period: usize) -> usize {
    rolling_lookback(period)
}

/// Returns the minimum input length that yields a defined SMA value.
#[inline]
#[must_use]
pub const fn sma_min_len(period: usize) -> usize {
    rolling_min_len(period)
}

/// Computes the Simple Moving Average of a series.
///
/// Returns a vector of the same length as the input. The first `period - 1`
/// values are NaN; an input shorter than `period` is entirely NaN.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
///
/// # Performance
///
/// O(n) time using a running sum.
#[must_use = "this returns a Result with the SMA values, which should be used"]
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, "period")?;
    rolling_mean(data, period)
}

/// Computes the SMA of a named column of a price table.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::MissingColumn` if the table has no such column
pub fn simple_moving_average<T: SeriesElement>(
    table: &PriceTable<T>,
    period: usize,
    column: &str,
) -> Result<Vec<T>> {
    validate_period(period, "period")?;
    sma(table.column(column)?, period)
}

/// SMA configuration with defaults (period 10, `Close` column).
///
/// ```
/// use ta_series::indicators::sma::Sma;
/// use ta_series::table::PriceTable;
///
/// let table = PriceTable::from_close((1..=12).map(f64::from).collect());
/// let result = Sma::new().period(4).compute_table(&table).unwrap();
/// assert_eq!(result[3], 2.5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sma {
    period: usize,
    column: String,
}

impl Default for Sma {
    fn default() -> Self {
        Self {
            period: 10,
            column: CLOSE.to_string(),
        }
    }
}

impl Sma {
    /// Creates an SMA configuration with the default period (10) and column (`Close`).
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

    /// Sets the column read by [`Sma::compute_table`].
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Computes the SMA of a series.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the period is zero.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        sma(data, self.period)
    }

    /// Computes the SMA of the configured table column.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` or `Error::MissingColumn`.
    pub fn compute_table<T: SeriesElement>(&self, table: &PriceTable<T>) -> Result<Vec<T>> {
        simple_moving_average(table, self.period, &self.column)
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

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        sma_lookback(self.period)
    }
}
