//! Bollinger Bands indicator.
//!
//! Bollinger Bands wrap a moving average in an envelope scaled by the rolling
//! volatility of the price:
//! - **Middle**: SMA of the price
//! - **Upper**: middle + `m` × sample standard deviation
//! - **Lower**: middle - `m` × sample standard deviation
//!
//! The table entry point applies the bands to the typical price
//! `(High + Low + Close) / 3`.
//!
//! # Conventions
//!
//! - The deviation is the **sample** standard deviation (÷ `n - 1`). With a
//!   window of one the bands are NaN while the middle line is defined.
//! - A window of identical values has a deviation of exactly zero, so the
//!   bands collapse onto the middle line.
//!
//! # Formula
//!
//! ```text
//! middle[i] = mean(x[i-n+1..=i])
//! spread[i] = sqrt(Σ (x - middle[i])² / (n - 1))
//! upper[i]  = middle[i] + m · spread[i]
//! lower[i]  = middle[i] - m · spread[i]
//! ```
//!
//! # Example
//!
//! ```
//! use ta_series::indicators::bollinger::bollinger;
//!
//! let data = vec![5.0_f64; 5];
//! let bands = bollinger(&data, 3, 2.0).unwrap();
//!
//! assert!(bands.lower[1].is_nan());
//! assert_eq!(bands.lower[2], 5.0);
//! assert_eq!(bands.upper[4], 5.0);
//! ```

use crate::error::{Error, Result};
use crate::kernels::rolling::{rolling_lookback, rolling_mean, rolling_std};
use crate::table::{PriceTable, CLOSE, HIGH, LOW};
use crate::traits::{validate_finite, validate_period, SeriesElement};

/// Returns the lookback period for Bollinger Bands (`period - 1`).
#[inline]
#[must_use]
pub const fn bollinger_lookback(period: usize) -> usize {
    rolling_lookback(period)
}

/// Returns the minimum input length that yields defined bands.
///
/// The sample deviation needs a window of at least two observations, so a
/// period below 2 never yields bands and this returns `usize::MAX`.
#[inline]
#[must_use]
pub const fn bollinger_min_len(period: usize) -> usize {
    if period < 2 {
        usize::MAX
    } else {
        period
    }
}

/// Lower, middle and upper Bollinger Bands.
///
/// All three vectors have the same length as the input.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerOutput<T> {
    /// Middle band minus the scaled deviation.
    pub lower: Vec<T>,
    /// The rolling mean.
    pub middle: Vec<T>,
    /// Middle band plus the scaled deviation.
    pub upper: Vec<T>,
}

impl<T> BollingerOutput<T> {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    /// Returns true if the output has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

/// Typical price `(high + low + close) / 3`, row by row.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `low` or `close` differs in length from
/// `high`.
pub fn typical_price<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    for (column, values) in [(LOW, low), (CLOSE, close)] {
        if values.len() != high.len() {
            return Err(Error::LengthMismatch {
                column: column.to_string(),
                expected: high.len(),
                actual: values.len(),
            });
        }
    }

    let three = T::three();
    Ok(high
        .iter()
        .zip(low)
        .zip(close)
        .map(|((&h, &l), &c)| (h + l + c) / three)
        .collect())
}

/// Computes Bollinger Bands over a single series.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::InvalidParameter` if `num_std_dev` is NaN or infinite
///
/// # Performance
///
/// The middle line is O(n). The deviation is computed per window in two
/// passes, O(n · period), which keeps flat windows exact.
#[must_use = "this returns a Result with the Bollinger Bands, which should be used"]
pub fn bollinger<T: SeriesElement>(
    data: &[T],
    period: usize,
    num_std_dev: T,
) -> Result<BollingerOutput<T>> {
    validate_period(period, "period")?;
    validate_finite(num_std_dev, "num_std_dev")?;

    let middle = rolling_mean(data, period)?;
    let spread = rolling_std(data, period)?;

    let (lower, upper) = middle
        .iter()
        .zip(&spread)
        .map(|(&center, &sd)| {
            let offset = num_std_dev * sd;
            (center - offset, center + offset)
        })
        .unzip();

    Ok(BollingerOutput {
        lower,
        middle,
        upper,
    })
}

/// Computes Bollinger Bands of the typical price of a table with `High`,
/// `Low` and `Close` columns.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::InvalidParameter` if `num_std_dev` is NaN or infinite
/// - `Error::MissingColumn` if a required column is absent
pub fn bollinger_bands<T: SeriesElement>(
    table: &PriceTable<T>,
    period: usize,
    num_std_dev: f64,
) -> Result<BollingerOutput<T>> {
    validate_period(period, "period")?;
    validate_finite(num_std_dev, "num_std_dev")?;
    let num_std_dev = T::from_f64(num_std_dev)?;

    let typical = typical_price(table.column(HIGH)?, table.column(LOW)?, table.column(CLOSE)?)?;
    bollinger(&typical, period, num_std_dev)
}

/// Bollinger Bands configuration. Defaults: period 20, two deviations.
///
/// ```
/// use ta_series::indicators::bollinger::Bollinger;
/// use ta_series::table::PriceTable;
///
/// let table = PriceTable::from_hlc(vec![11.0_f64; 25], vec![9.0; 25], vec![10.0; 25]).unwrap();
/// let bands = Bollinger::new().compute_table(&table).unwrap();
/// assert_eq!(bands.middle[19], 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bollinger {
    period: usize,
    num_std_dev: f64,
}

impl Default for Bollinger {
    fn default() -> Self {
        Self {
            period: 20,
            num_std_dev: 2.0,
        }
    }
}

impl Bollinger {
    /// Creates a configuration with the default parameters.
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

    /// Sets the deviation multiplier.
    #[must_use]
    pub const fn num_std_dev(mut self, num_std_dev: f64) -> Self {
        self.num_std_dev = num_std_dev;
        self
    }

    /// Computes the bands over a single series.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` or `Error::InvalidParameter`.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<BollingerOutput<T>> {
        validate_finite(self.num_std_dev, "num_std_dev")?;
        bollinger(data, self.period, T::from_f64(self.num_std_dev)?)
    }

    /// Computes the bands of a table's typical price.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod`, `Error::InvalidParameter` or
    /// `Error::MissingColumn`.
    pub fn compute_table<T: SeriesElement>(
        &self,
        table: &PriceTable<T>,
    ) -> Result<BollingerOutput<T>> {
        bollinger_bands(table, self.period, self.num_std_dev)
    }

    /// Returns the window length.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the deviation multiplier.
    #[must_use]
    pub const fn get_num_std_dev(&self) -> f64 {
        self.num_std_dev
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::utils::{approx_eq, count_nan_prefix, series_approx_eq, EPSILON};

    #[test]
    fn test_flat_table_bands_collapse() {
        let table =
            PriceTable::from_hlc(vec![5.0_f64; 5], vec![5.0; 5], vec![5.0; 5]).unwrap();
        let bands = bollinger_bands(&table, 3, 2.0).unwrap();
        assert_eq!(bands.len(), 5);
        assert!(bands.lower[0].is_nan() && bands.upper[1].is_nan());
        for i in 2..5 {
            assert_eq!(bands.lower[i], 5.0);
            assert_eq!(bands.middle[i], 5.0);
            assert_eq!(bands.upper[i], 5.0);
        }
    }

    #[test]
    fn test_flat_series_bands_are_exact() {
        let bands = bollinger(&[0.1_f64; 12], 3, 2.0).unwrap();
        for i in 2..12 {
            assert_eq!(bands.lower[i], 0.1);
            assert_eq!(bands.middle[i], 0.1);
            assert_eq!(bands.upper[i], 0.1);
        }
    }

    #[test]
    fn test_sample_deviation() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0];
        let bands = bollinger(&data, 3, 1.0).unwrap();
        // window [1, 2, 3]: mean 2, sample sd 1
        assert!(approx_eq(bands.middle[2], 2.0, EPSILON));
        assert!(approx_eq(bands.upper[2], 3.0, EPSILON));
        assert!(approx_eq(bands.lower[2], 1.0, EPSILON));
        assert!(approx_eq(bands.upper[3], 4.0, EPSILON));
    }

    #[test]
    fn test_typical_price() {
        let typical = typical_price(&[12.0_f64, 15.0], &[9.0, 9.0], &[9.0, 12.0]).unwrap();
        assert_eq!(typical, vec![10.0, 12.0]);
        assert!(matches!(
            typical_price(&[1.0_f64, 2.0], &[1.0], &[1.0, 2.0]),
            Err(Error::LengthMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_table_uses_typical_price() {
        let high = vec![11.0_f64, 13.0, 12.0, 15.0, 14.0, 16.0];
        let low = vec![9.0_f64, 10.0, 10.5, 12.0, 12.5, 13.0];
        let close = vec![10.0_f64, 12.0, 11.0, 14.0, 13.0, 15.5];
        let typical = typical_price(&high, &low, &close).unwrap();
        let table = PriceTable::from_hlc(high, low, close).unwrap();

        let from_table = bollinger_bands(&table, 4, 2.0).unwrap();
        let from_series = bollinger(&typical, 4, 2.0).unwrap();
        assert!(series_approx_eq(&from_table.lower, &from_series.lower, EPSILON));
        assert!(series_approx_eq(&from_table.middle, &from_series.middle, EPSILON));
        assert!(series_approx_eq(&from_table.upper, &from_series.upper, EPSILON));
    }

    #[test]
    fn test_bands_ordered() {
        let data: Vec<f64> = (0..100).map(|i| 50.0 + (i as f64 * 0.21).sin() * 4.0).collect();
        let bands = bollinger(&data, 20, 2.0).unwrap();
        assert_eq!(count_nan_prefix(&bands.middle), bollinger_lookback(20));
        for i in 19..100 {
            assert!(bands.lower[i] <= bands.middle[i]);
            assert!(bands.middle[i] <= bands.upper[i]);
        }
    }

    #[test]
    fn test_period_one_bands_are_nan() {
        let data = vec![1.0_f64, 2.0, 3.0];
        let bands = bollinger(&data, 1, 2.0).unwrap();
        assert_eq!(bands.middle, data);
        assert!(bands.lower.iter().chain(&bands.upper).all(|v| v.is_nan()));
        assert_eq!(bollinger_min_len(1), usize::MAX);
        assert_eq!(bollinger_min_len(2), 2);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            bollinger(&[1.0_f64], 0, 2.0),
            Err(Error::InvalidPeriod { .. })
        ));
        assert!(matches!(
            bollinger(&[1.0_f64], 3, f64::NAN),
            Err(Error::InvalidParameter { name: "num_std_dev", .. })
        ));
        assert!(Bollinger::new().num_std_dev(f64::INFINITY).compute(&[1.0_f64]).is_err());
    }

    #[test]
    fn test_missing_columns() {
        let table = PriceTable::from_close(vec![1.0_f64, 2.0, 3.0]);
        assert!(matches!(
            bollinger_bands(&table, 2, 2.0),
            Err(Error::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_config_defaults() {
        let config = Bollinger::default();
        assert_eq!(config.get_period(), 20);
        assert_eq!(config.get_num_std_dev(), 2.0);
        let config = config.period(10).num_std_dev(1.5);
        assert_eq!(config.get_period(), 10);
        assert_eq!(config.get_num_std_dev(), 1.5);
    }
}
