//! Relative Strength Index (RSI) indicator.
//!
//! RSI is a bounded momentum oscillator comparing the magnitude of recent
//! gains with recent losses.
//!
//! # Algorithm
//!
//! 1. Take the first difference of the series (the first difference is NaN)
//! 2. Split it into gains `max(Δ, 0)` and losses `max(-Δ, 0)`
//! 3. Smooth both with Wilder's exponential weighting: center of mass
//!    `period - 1`, so `α = 1 / period`, and `min_periods = period`
//! 4. `RSI = 100 - 100 / (1 + gain / loss)`
//!
//! The first defined value is at index `period`.
//!
//! # Degenerate windows
//!
//! Arithmetic is left to IEEE semantics: no losses gives `RS = ∞` and an RSI of
//! exactly 100, while no gains and no losses (a flat series) gives NaN.
//!
//! # Example
//!
//! ```
//! use ta_series::indicators::rsi::rsi;
//!
//! let rising: Vec<f64> = (1..=20).map(f64::from).collect();
//! let result = rsi(&rising, 14).unwrap();
//!
//! assert!(result[13].is_nan());
//! assert_eq!(result[14], 100.0);
//! ```

use crate::error::Result;
use crate::kernels::ewm::{ewm_mean_with, Decay};
use crate::table::{PriceTable, CLOSE};
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback period for RSI (`period`).
///
/// One extra observation is consumed by the price difference.
#[inline]
#[must_use]
pub const fn rsi_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length that yields a defined RSI value.
#[inline]
#[must_use]
pub const fn rsi_min_len(period: usize) -> usize {
    period + 1
}

/// Computes the Relative Strength Index of a series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
#[must_use = "this returns a Result with the RSI values, which should be used"]
pub fn rsi<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let decay = Decay::wilder(period)?;
    let (gains, losses) = split_changes(data);

    let avg_gain = ewm_mean_with(&gains, decay, period)?;
    let avg_loss = ewm_mean_with(&losses, decay, period)?;

    let hundred = T::hundred();
    Ok(avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(&gain, &loss)| {
            let rs = gain / loss;
            hundred - hundred / (T::one() + rs)
        })
        .collect())
}

/// Computes the RSI of a named column of a price table.
///
/// `period` has no default.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::MissingColumn` if the table has no such column
pub fn relative_strength_index<T: SeriesElement>(
    table: &PriceTable<T>,
    period: usize,
    column: &str,
) -> Result<Vec<T>> {
    validate_period(period, "period")?;
    rsi(table.column(column)?, period)
}

/// Gains and losses of each step. Position 0 and any change touching a NaN
/// stay NaN.
fn split_changes<T: SeriesElement>(data: &[T]) -> (Vec<T>, Vec<T>) {
    let mut gains = Vec::with_capacity(data.len());
    let mut losses = Vec::with_capacity(data.len());

    if !data.is_empty() {
        gains.push(T::nan());
        losses.push(T::nan());
    }

    for pair in data.windows(2) {
        let delta = pair[1] - pair[0];
        if delta.is_nan() {
            gains.push(T::nan());
            losses.push(T::nan());
        } else {
            gains.push(delta.max(T::zero()));
            losses.push((-delta).max(T::zero()));
        }
    }

    (gains, losses)
}

/// RSI configuration. The period is required; the column defaults to `Close`.
///
/// ```
/// use ta_series::indicators::rsi::Rsi;
///
/// let falling: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();
/// let result = Rsi::new(5).compute(&falling).unwrap();
/// assert_eq!(result[5], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rsi {
    period: usize,
    column: String,
}

impl Rsi {
    /// Creates an RSI configuration over `period` observations.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self {
            period,
            column: CLOSE.to_string(),
        }
    }

    /// Sets the column read by [`Rsi::compute_table`].
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Computes the RSI of a series.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the period is zero.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        rsi(data, self.period)
    }

    /// Computes the RSI of the configured table column.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` or `Error::MissingColumn`.
    pub fn compute_table<T: SeriesElement>(&self, table: &PriceTable<T>) -> Result<Vec<T>> {
        relative_strength_index(table, self.period, &self.column)
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
        rsi_lookback(self.period)
    }
}
