//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA weights recent observations more heavily than older ones using the
//! smoothing factor `α = 2 / (span + 1)`.
//!
//! # Algorithm
//!
//! The EMA is the adjusted exponentially weighted mean from
//! [`kernels::ewm`](crate::kernels::ewm): a single forward scan whose first
//! values are the weighted average of the leading observations rather than a
//! copy of the first price. Output is NaN until `min_periods` observations
//! (by default `span`) have been seen.
//!
//! # Formula
//!
//! ```text
//! α = 2 / (span + 1)
//! EMA[i] = Σ (1-α)^k · x[i-k]  /  Σ (1-α)^k
//!        ≈ α · x[i] + (1 - α) · EMA[i-1]   once the weights converge
//! ```
//!
//! # Example
//!
//! ```
//! use ta_series::indicators::ema::ema;
//!
//! let data = vec![10.0_f64, 11.0, 12.0, 13.0, 14.0, 15.0];
//! let result = ema(&data, 3).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! // (12 + 0.5·11 + 0.25·10) / 1.75
//! assert!((result[2] - 20.0 / 1.75).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::kernels::ewm::{ewm_mean, Decay};
use crate::table::{PriceTable, CLOSE};
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback period for EMA (`span - 1`).
///
/// ```
/// use ta_series::indicators::ema::ema_lookback;
///
/// assert_eq!(ema_lookback(12), 11);
/// ```
#[inline]
#[must_use]
pub const fn ema_lookback(span: usize) -> usize {
    span.saturating_sub(1)
}

/// Returns the minimum input length that yields a defined EMA value.
#[inline]
#[must_use]
pub const fn ema_min_len(span: usize) -> usize {
    span
}

/// Computes the Exponential Moving Average with `min_periods = span`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `span` is zero.
///
/// # Performance
///
/// O(n), one pass carrying a single accumulator.
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema<T: SeriesElement>(data: &[T], span: usize) -> Result<Vec<T>> {
    ema_with_min_periods(data, span, span)
}

/// Computes the EMA with an explicit minimum-periods threshold.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `span` is zero.
///
/// ```
/// use ta_series::indicators::ema::ema_with_min_periods;
///
/// let data = vec![1.0_f64, 2.0, 3.0];
/// let result = ema_with_min_periods(&data, 10, 1).unwrap();
/// assert_eq!(result[0], 1.0);
/// ```
pub fn ema_with_min_periods<T: SeriesElement>(
    data: &[T],
    span: usize,
    min_periods: usize,
) -> Result<Vec<T>> {
    validate_period(span, "span")?;
    let alpha = Decay::Span(span).alpha()?;
    ewm_mean(data, alpha, min_periods)
}

/// Computes the EMA of a named column of a price table.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `span` is zero
/// - `Error::MissingColumn` if the table has no such column
pub fn exponential_moving_average<T: SeriesElement>(
    table: &PriceTable<T>,
    span: usize,
    column: &str,
) -> Result<Vec<T>> {
    validate_period(span, "span")?;
    ema(table.column(column)?, span)
}

/// EMA configuration with defaults (span 10, `min_periods = span`, `Close` column).
///
/// ```
/// use ta_series::indicators::ema::Ema;
///
/// let data: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
/// let result = Ema::new().span(5).min_periods(1).compute(&data).unwrap();
/// assert!(!result[0].is_nan());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ema {
    span: usize,
    min_periods: Option<usize>,
    column: String,
}

impl Default for Ema {
    fn default() -> Self {
        Self {
            span: 10,
            min_periods: None,
            column: CLOSE.to_string(),
        }
    }
}

impl Ema {
    /// Creates an EMA configuration with the default span (10) and column (`Close`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the span.
    #[must_use]
    pub const fn span(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Overrides the minimum number of observations (defaults to the span).
    #[must_use]
    pub const fn min_periods(mut self, min_periods: usize) -> Self {
        self.min_periods = Some(min_periods);
        self
    }

    /// Sets the column read by [`Ema::compute_table`].
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Computes the EMA of a series.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if the span is zero.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        ema_with_min_periods(data, self.span, self.get_min_periods())
    }

    /// Computes the EMA of the configured table column.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` or `Error::MissingColumn`.
    pub fn compute_table<T: SeriesElement>(&self, table: &PriceTable<T>) -> Result<Vec<T>> {
        validate_period(self.span, "span")?;
        self.compute(table.column(&self.column)?)
    }

    /// Returns the span.
    #[must_use]
    pub const fn get_span(&self) -> usize {
        self.span
    }

    /// Returns the effective minimum number of observations.
    #[must_use]
    pub fn get_min_periods(&self) -> usize {
        self.min_periods.unwrap_or(self.span)
    }

    /// Returns the column name.
    #[must_use]
    pub fn get_column(&self) -> &str {
        &self.column
    }
}
