//! Stochastic Oscillator indicator.
//!
//! The Stochastic Oscillator locates the latest price within the range of the
//! last `k_period` prices of the same series.
//!
//! # Formula
//!
//! ```text
//! highest[i] = max(x[i-k_period+1..=i])
//! lowest[i]  = min(x[i-k_period+1..=i])
//! %K[i] = 100 · (x[i] - lowest[i]) / (highest[i] - lowest[i])
//! %D = moving average of %K over d_period (SMA, WMA or EMA)
//! ```
//!
//! A flat window has a zero range. The division is left to IEEE arithmetic,
//! so %K is NaN there and any %D window that includes it is NaN for SMA and
//! WMA. The EMA flavour carries its previous value across the gap.
//!
//! # Example
//!
//! ```
//! use ta_series::indicators::ma::MovingAverage;
//! use ta_series::indicators::stochastic::stochastic;
//!
//! let data = vec![1.0_f64, 3.0, 2.0, 4.0, 3.0, 5.0];
//! let result = stochastic(&data, 3, 2, MovingAverage::Sma).unwrap();
//!
//! // window [1, 3, 2]: (2 - 1) / (3 - 1)
//! assert_eq!(result.k[2], 50.0);
//! assert!(result.d[2].is_nan());
//! // window [3, 2, 4] gives 100
//! assert_eq!(result.d[3], 75.0);
//! ```

use crate::error::Result;
use crate::indicators::ma::MovingAverage;
use crate::kernels::rolling::{rolling_extrema, rolling_lookback};
use crate::table::{PriceTable, CLOSE};
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback period for %K (`k_period - 1`).
#[inline]
#[must_use]
pub const fn stochastic_k_lookback(k_period: usize) -> usize {
    rolling_lookback(k_period)
}

/// Returns the lookback period for %D (`k_period + d_period - 2`).
///
/// The same for every moving-average method.
///
/// ```
/// use ta_series::indicators::stochastic::stochastic_d_lookback;
///
/// assert_eq!(stochastic_d_lookback(14, 3), 15);
/// ```
#[inline]
#[must_use]
pub const fn stochastic_d_lookback(k_period: usize, d_period: usize) -> usize {
    rolling_lookback(k_period) + rolling_lookback(d_period)
}

/// Returns the minimum input length that yields a defined %D value.
#[inline]
#[must_use]
pub const fn stochastic_min_len(k_period: usize, d_period: usize) -> usize {
    stochastic_d_lookback(k_period, d_period) + 1
}

/// %K and %D lines of the Stochastic Oscillator.
///
/// Both vectors have the same length as the input.
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticOutput<T> {
    /// The %K line.
    pub k: Vec<T>,
    /// The %D line, the selected moving average of %K.
    pub d: Vec<T>,
}

impl<T> StochasticOutput<T> {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.k.len()
    }

    /// Returns true if the output has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.k.is_empty()
    }
}

/// Computes the Stochastic Oscillator of a series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `k_period` or `d_period` is zero.
///
/// # Performance
///
/// O(n): the rolling extrema come from monotonic deques.
#[must_use = "this returns a Result with the Stochastic output, which should be used"]
pub fn stochastic<T: SeriesElement>(
    data: &[T],
    k_period: usize,
    d_period: usize,
    method: MovingAverage,
) -> Result<StochasticOutput<T>> {
    validate_period(k_period, "k_period")?;
    validate_period(d_period, "d_period")?;

    let extrema = rolling_extrema(data, k_period)?;
    let hundred = T::hundred();

    let k: Vec<T> = data
        .iter()
        .zip(extrema.max.iter().zip(&extrema.min))
        .map(|(&x, (&highest, &lowest))| (x - lowest) / (highest - lowest) * hundred)
        .collect();
    let d = method.apply(&k, d_period)?;

    Ok(StochasticOutput { k, d })
}

/// Computes the Stochastic Oscillator of a named column of a price table.
///
/// `method` is parsed case-insensitively (`"sma"`, `"wma"` or `"ema"`).
/// Every parameter is checked before the table is read.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if a period is zero
/// - `Error::UnknownMovingAverage` if `method` is not a supported name
/// - `Error::MissingColumn` if the table has no such column
pub fn stochastic_oscillator<T: SeriesElement>(
    table: &PriceTable<T>,
    k_period: usize,
    d_period: usize,
    column: &str,
    method: &str,
) -> Result<StochasticOutput<T>> {
    validate_period(k_period, "k_period")?;
    validate_period(d_period, "d_period")?;
    let method: MovingAverage = method.parse()?;
    stochastic(table.column(column)?, k_period, d_period, method)
}

/// Stochastic Oscillator configuration.
///
/// Defaults: `k_period` 14, `d_period` 3, `Close` column, SMA smoothing.
///
/// ```
/// use ta_series::indicators::stochastic::Stochastic;
///
/// let data: Vec<f64> = (0..40).map(|i| (i as f64 * 0.4).sin()).collect();
/// let result = Stochastic::new()
///     .k_period(5)
///     .method_name("wma")
///     .unwrap()
///     .compute(&data)
///     .unwrap();
/// assert_eq!(result.len(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stochastic {
    k_period: usize,
    d_period: usize,
    column: String,
    method: MovingAverage,
}

impl Default for Stochastic {
    fn default() -> Self {
        Self {
            k_period: 14,
            d_period: 3,
            column: CLOSE.to_string(),
            method: MovingAverage::Sma,
        }
    }
}

impl Stochastic {
    /// Creates a configuration with the default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the %K window.
    #[must_use]
    pub const fn k_period(mut self, k_period: usize) -> Self {
        self.k_period = k_period;
        self
    }

    /// Sets the %D smoothing period.
    #[must_use]
    pub const fn d_period(mut self, d_period: usize) -> Self {
        self.d_period = d_period;
        self
    }

    /// Sets the column read by [`Stochastic::compute_table`].
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Sets the %D smoothing method.
    #[must_use]
    pub const fn method(mut self, method: MovingAverage) -> Self {
        self.method = method;
        self
    }

    /// Sets the %D smoothing method by name.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownMovingAverage` for an unsupported name.
    pub fn method_name(self, name: &str) -> Result<Self> {
        Ok(self.method(name.parse()?))
    }

    /// Computes the oscillator of a series.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if a period is zero.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<StochasticOutput<T>> {
        stochastic(data, self.k_period, self.d_period, self.method)
    }

    /// Computes the oscillator of the configured table column.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` or `Error::MissingColumn`.
    pub fn compute_table<T: SeriesElement>(
        &self,
        table: &PriceTable<T>,
    ) -> Result<StochasticOutput<T>> {
        validate_period(self.k_period, "k_period")?;
        validate_period(self.d_period, "d_period")?;
        self.compute(table.column(&self.column)?)
    }

    /// Returns the %K window.
    #[must_use]
    pub const fn get_k_period(&self) -> usize {
        self.k_period
    }

    /// Returns the %D smoothing period.
    #[must_use]
    pub const fn get_d_period(&self) -> usize {
        self.d_period
    }

    /// Returns the column name.
    #[must_use]
    pub fn get_column(&self) -> &str {
        &self.column
    }

    /// Returns the %D smoothing method.
    #[must_use]
    pub const fn get_method(&self) -> MovingAverage {
        self.method
    }
}
