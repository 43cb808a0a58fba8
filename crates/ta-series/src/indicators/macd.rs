//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! MACD tracks the gap between a fast and a slow EMA, and smooths that gap
//! into a signal line.
//!
//! # Formula
//!
//! ```text
//! MACD Line   = EMA(price, fast) - EMA(price, slow)
//! Signal Line = EMA(MACD Line, signal)
//! Difference  = MACD Line - Signal Line
//! ```
//!
//! Every EMA requires `min_periods = span`. The signal EMA starts at the first
//! defined MACD value, so the signal line needs `signal - 1` further rows.
//! A fast span longer than the slow span is accepted; the MACD line then has
//! the opposite sign.
//!
//! # Example
//!
//! ```
//! use ta_series::indicators::macd::{macd, macd_line_lookback, macd_signal_lookback};
//!
//! let prices: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
//! let result = macd(&prices, 12, 26, 9).unwrap();
//!
//! assert!(result.macd[macd_line_lookback(12, 26) - 1].is_nan());
//! assert!(!result.macd[macd_line_lookback(12, 26)].is_nan());
//! assert!(!result.signal[macd_signal_lookback(12, 26, 9)].is_nan());
//! ```

use crate::error::Result;
use crate::indicators::ema::ema;
use crate::table::{PriceTable, CLOSE};
use crate::traits::{validate_period, SeriesElement};

/// Returns the lookback of the MACD line (`max(fast, slow) - 1`).
///
/// ```
/// use ta_series::indicators::macd::macd_line_lookback;
///
/// assert_eq!(macd_line_lookback(12, 26), 25);
/// ```
#[inline]
#[must_use]
pub const fn macd_line_lookback(fast_period: usize, slow_period: usize) -> usize {
    let longest = if fast_period > slow_period {
        fast_period
    } else {
        slow_period
    };
    longest.saturating_sub(1)
}

/// Returns the lookback of the signal and difference lines.
///
/// ```
/// use ta_series::indicators::macd::macd_signal_lookback;
///
/// assert_eq!(macd_signal_lookback(12, 26, 9), 33);
/// ```
#[inline]
#[must_use]
pub const fn macd_signal_lookback(
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> usize {
    macd_line_lookback(fast_period, slow_period) + signal_period.saturating_sub(1)
}

/// Returns the minimum input length that yields a defined signal value.
#[inline]
#[must_use]
pub const fn macd_min_len(fast_period: usize, slow_period: usize, signal_period: usize) -> usize {
    macd_signal_lookback(fast_period, slow_period, signal_period) + 1
}

/// MACD, signal and difference lines.
///
/// All three vectors have the same length as the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput<T> {
    /// Fast EMA minus slow EMA.
    pub macd: Vec<T>,
    /// EMA of the MACD line.
    pub signal: Vec<T>,
    /// MACD line minus signal line.
    pub difference: Vec<T>,
}

impl<T> MacdOutput<T> {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.macd.len()
    }

    /// Returns true if the output has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macd.is_empty()
    }
}

/// Computes MACD over a series.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if any period is zero.
#[must_use = "this returns a Result with the MACD output, which should be used"]
pub fn macd<T: SeriesElement>(
    data: &[T],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdOutput<T>> {
    validate_period(fast_period, "fast_period")?;
    validate_period(slow_period, "slow_period")?;
    validate_period(signal_period, "signal_period")?;

    let fast = ema(data, fast_period)?;
    let slow = ema(data, slow_period)?;
    let macd_line: Vec<T> = fast.iter().zip(&slow).map(|(&f, &s)| f - s).collect();

    let signal = ema(&macd_line, signal_period)?;
    let difference = macd_line
        .iter()
        .zip(&signal)
        .map(|(&m, &s)| m - s)
        .collect();

    Ok(MacdOutput {
        macd: macd_line,
        signal,
        difference,
    })
}

/// Computes MACD of a named column of a price table.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if any period is zero
/// - `Error::MissingColumn` if the table has no such column
pub fn moving_average_convergence_divergence<T: SeriesElement>(
    table: &PriceTable<T>,
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
    column: &str,
) -> Result<MacdOutput<T>> {
    validate_period(fast_period, "fast_period")?;
    validate_period(slow_period, "slow_period")?;
    validate_period(signal_period, "signal_period")?;
    macd(table.column(column)?, fast_period, slow_period, signal_period)
}

/// MACD configuration. Defaults: 12 / 26 / 9 over `Close`.
///
/// ```
/// use ta_series::indicators::macd::Macd;
/// use ta_series::table::PriceTable;
///
/// let table = PriceTable::from_close((0..60).map(|i| 50.0 + (i as f64).sqrt()).collect());
/// let result = Macd::new().compute_table(&table).unwrap();
/// assert_eq!(result.len(), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
    column: String,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
            column: CLOSE.to_string(),
        }
    }
}

impl Macd {
    /// Creates a configuration with the default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fast EMA span.
    #[must_use]
    pub const fn fast_period(mut self, period: usize) -> Self {
        self.fast_period = period;
        self
    }

    /// Sets the slow EMA span.
    #[must_use]
    pub const fn slow_period(mut self, period: usize) -> Self {
        self.slow_period = period;
        self
    }

    /// Sets the signal EMA span.
    #[must_use]
    pub const fn signal_period(mut self, period: usize) -> Self {
        self.signal_period = period;
        self
    }

    /// Sets the column read by [`Macd::compute_table`].
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    /// Computes MACD over a series.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if any period is zero.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<MacdOutput<T>> {
        macd(data, self.fast_period, self.slow_period, self.signal_period)
    }

    /// Computes MACD of the configured table column.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` or `Error::MissingColumn`.
    pub fn compute_table<T: SeriesElement>(&self, table: &PriceTable<T>) -> Result<MacdOutput<T>> {
        moving_average_convergence_divergence(
            table,
            self.fast_period,
            self.slow_period,
            self.signal_period,
            &self.column,
        )
    }

    /// Returns the fast EMA span.
    #[must_use]
    pub const fn get_fast_period(&self) -> usize {
        self.fast_period
    }

    /// Returns the slow EMA span.
    #[must_use]
    pub const fn get_slow_period(&self) -> usize {
        self.slow_period
    }

    /// Returns the signal EMA span.
    #[must_use]
    pub const fn get_signal_period(&self) -> usize {
        self.signal_period
    }

    /// Returns the column name.
    #[must_use]
    pub fn get_column(&self) -> &str {
        &self.column
    }

    /// Returns the signal-line lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        macd_signal_lookback(self.fast_period, self.slow_period, self.signal_period)
    }
}
