//! Helpers for comparing and inspecting indicator output.
//!
//! Indicator outputs mark missing history with NaN, so plain `==` is a poor
//! fit for checking them. The comparison helpers here treat two NaNs as
//! equal, and the counting helpers measure the undefined prefix.
//!
//! # Example
//!
//! ```
//! use ta_series::utils::{approx_eq, first_defined, EPSILON};
//!
//! let a = 1.0 / 3.0;
//! let b = 0.333333333333333;
//! assert!(approx_eq(a, b, EPSILON));
//!
//! let output = vec![f64::NAN, f64::NAN, 2.0, 3.0];
//! assert_eq!(first_defined(&output), Some(2));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other, if both
/// are NaN, or if both are the same infinity.
///
/// # Example
///
/// ```
/// use ta_series::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality check for floating-point values.
///
/// Returns `true` if the relative difference between `a` and `b` is less than
/// `rel_tolerance`, or if both are NaN.
///
/// # Example
///
/// ```
/// use ta_series::utils::approx_eq_relative;
///
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
/// assert!(approx_eq_relative(1e-10, 1.000000001e-10, 1e-8));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());

    if max_abs == T::zero() {
        return diff == T::zero();
    }

    diff / max_abs < rel_tolerance
}

/// Element-wise [`approx_eq`] over two series of the same length.
///
/// ```
/// use ta_series::utils::{series_approx_eq, EPSILON};
///
/// assert!(series_approx_eq(&[f64::NAN, 1.0], &[f64::NAN, 1.0], EPSILON));
/// assert!(!series_approx_eq(&[1.0], &[1.0, 2.0], EPSILON));
/// ```
#[must_use]
pub fn series_approx_eq<T: SeriesElement>(a: &[T], b: &[T], tolerance: T) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| approx_eq(x, y, tolerance))
}

/// Count the number of NaN values in a slice.
///
/// ```
/// use ta_series::utils::count_nans;
///
/// assert_eq!(count_nans(&[f64::NAN, 1.0, f64::NAN, 2.0]), 2);
/// ```
#[inline]
#[must_use]
pub fn count_nans<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Count the number of NaN values at the beginning of a slice.
///
/// For a NaN-free input this equals the indicator's lookback.
///
/// ```
/// use ta_series::utils::count_nan_prefix;
///
/// assert_eq!(count_nan_prefix(&[f64::NAN, f64::NAN, 1.0, 2.0, f64::NAN]), 2);
/// ```
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}

/// Index of the first non-NaN value, or `None` if every value is NaN.
#[inline]
#[must_use]
pub fn first_defined<T: SeriesElement>(data: &[T]) -> Option<usize> {
    data.iter().position(|x| !x.is_nan())
}
