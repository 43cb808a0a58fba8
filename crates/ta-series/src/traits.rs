//! Core traits for ta-series numeric operations.
//!
//! This module defines the traits used throughout the library for generic
//! numeric operations on price series, together with the parameter
//! validation shared by every indicator.
//!
//! # Example
//!
//! ```
//! use ta_series::traits::{validate_period, SeriesElement};
//!
//! fn mean_of_head<T: SeriesElement>(data: &[T], period: usize) -> ta_series::Result<T> {
//!     validate_period(period, "period")?;
//!
//!     let period_t = T::from_usize(period)?;
//!     let sum: T = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / period_t)
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = mean_of_head(&data, 3).unwrap();
//! assert!((result - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a price series.
///
/// This trait abstracts over `f32` and `f64`. NaN is the "undefined" marker
/// for both missing input observations and output positions without enough
/// history.
///
/// # Type Bounds
///
/// - `Float`: Standard floating-point operations (NaN handling, infinity, arithmetic)
/// - `NumCast`: Safe conversion between numeric types
/// - `Copy`: Values can be copied (required for efficient iteration)
/// - `Default`: A default value exists (typically zero)
/// - `Send + Sync`: Outputs can be handed across threads by the caller
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// This is commonly used for converting period parameters to the series element type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant 3 as this type.
    ///
    /// Used for the typical price `(high + low + close) / 3`.
    #[inline]
    #[must_use]
    fn three() -> Self {
        Self::two() + Self::one()
    }

    /// Returns the constant 100 as this type.
    ///
    /// Used for percentage scaling in RSI and the Stochastic Oscillator.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        <Self as NumCast>::from(100).unwrap_or_else(Self::nan)
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a window, span or period is usable.
///
/// `name` identifies the parameter in the returned error.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub fn validate_period(period: usize, name: &'static str) -> Result<()> {
    if period == 0 {
        tracing::debug!(parameter = name, period, "rejected indicator period");
        Err(Error::InvalidPeriod {
            name,
            period,
            reason: "must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates that a floating-point parameter is finite.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if the value is NaN or infinite.
#[inline]
pub fn validate_finite<T: SeriesElement>(value: T, name: &'static str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        tracing::debug!(parameter = name, "rejected non-finite parameter");
        Err(Error::InvalidParameter {
            name,
            reason: "must be finite",
        })
    }
}
