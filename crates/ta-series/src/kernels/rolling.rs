//! Fixed-window rolling aggregations.
//!
//! Every rolling indicator in this crate (SMA, WMA, Bollinger Bands, the
//! Stochastic range) is built on the window walk in this module, so they all
//! agree on two rules:
//!
//! - **Warm-up**: the first `period - 1` outputs are NaN.
//! - **Missing data**: a window that contains a NaN produces NaN. Once the NaN
//!   leaves the window, output resumes.
//!
//! # Kernels
//!
//! - [`rolling_mean`]: compensated running sum, O(n)
//! - [`rolling_max`] / [`rolling_min`] / [`rolling_extrema`]: monotonic deque, O(n)
//! - [`rolling_std`]: sample standard deviation (divides by `n - 1`)
//! - [`rolling_apply`]: arbitrary reduction over each complete window
//!
//! # Example
//!
//! ```
//! use ta_series::kernels::rolling::{rolling_max, rolling_mean, rolling_min};
//!
//! let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//!
//! let max = rolling_max(&data, 3).unwrap();
//! assert!(max[1].is_nan());
//! assert_eq!(max[2], 4.0); // max of [3, 1, 4]
//! assert_eq!(max[5], 9.0); // max of [1, 5, 9]
//!
//! let min = rolling_min(&data, 3).unwrap();
//! assert_eq!(min[5], 1.0);
//!
//! let mean = rolling_mean(&data, 2).unwrap();
//! assert_eq!(mean[1], 2.0);
//! ```

use std::collections::VecDeque;

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};

/// Number of leading NaN values produced by a rolling kernel.
///
/// ```
/// use ta_series::kernels::rolling::rolling_lookback;
///
/// assert_eq!(rolling_lookback(20), 19);
/// ```
#[inline]
#[must_use]
pub const fn rolling_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Shortest input for which a rolling kernel yields a defined value.
#[inline]
#[must_use]
pub const fn rolling_min_len(period: usize) -> usize {
    period
}

/// One step of a window sliding across a series.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WindowStep<'a, T> {
    /// Position of the newest observation in the window.
    pub(crate) index: usize,
    /// The observation that entered the window at this step.
    pub(crate) entering: T,
    /// The observation that left the window at this step, once it is full.
    pub(crate) leaving: Option<T>,
    /// The full window, present only when it is complete and NaN-free.
    pub(crate) window: Option<&'a [T]>,
}

/// Walks a series one index at a time, tracking which windows are usable.
#[derive(Debug, Clone)]
pub(crate) struct WindowWalk<'a, T> {
    data: &'a [T],
    period: usize,
    next: usize,
    nan_count: usize,
}

impl<'a, T: SeriesElement> WindowWalk<'a, T> {
    /// `period` must be non-zero; callers validate it first.
    pub(crate) const fn new(data: &'a [T], period: usize) -> Self {
        Self {
            data,
            period,
            next: 0,
            nan_count: 0,
        }
    }
}

impl<'a, T: SeriesElement> Iterator for WindowWalk<'a, T> {
    type Item = WindowStep<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.data;
        let index = self.next;
        let entering = *data.get(index)?;
        self.next += 1;

        if entering.is_nan() {
            self.nan_count += 1;
        }

        let leaving = if index >= self.period {
            let value = data[index - self.period];
            if value.is_nan() {
                self.nan_count -= 1;
            }
            Some(value)
        } else {
            None
        };

        let window = (index + 1 >= self.period && self.nan_count == 0)
            .then(|| &data[index + 1 - self.period..=index]);

        Some(WindowStep {
            index,
            entering,
            leaving,
            window,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.next;
        (remaining, Some(remaining))
    }
}

/// Applies `reduce` to every complete, NaN-free window.
///
/// Positions without such a window are NaN. The reduction receives the window
/// in chronological order (oldest first).
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
///
/// # Example
///
/// ```
/// use ta_series::kernels::rolling::rolling_apply;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0];
/// let spans = rolling_apply(&data, 2, |w| w[1] - w[0]).unwrap();
/// assert!(spans[0].is_nan());
/// assert_eq!(spans[3], 1.0);
/// ```
pub fn rolling_apply<T, F>(data: &[T], period: usize, mut reduce: F) -> Result<Vec<T>>
where
    T: SeriesElement,
    F: FnMut(&[T]) -> T,
{
    validate_period(period, "window")?;

    let mut output = vec![T::nan(); data.len()];
    for step in WindowWalk::new(data, period) {
        if let Some(window) = step.window {
            output[step.index] = reduce(window);
        }
    }
    Ok(output)
}

/// Rolling arithmetic mean over `period` observations.
///
/// Maintains a compensated running sum of the non-NaN observations in the
/// window, so the cost per element is constant regardless of `period`. A
/// window of identical values yields that value exactly.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
///
/// ```
/// use ta_series::kernels::rolling::rolling_mean;
///
/// let result = rolling_mean(&[0.1_f64; 5], 3).unwrap();
/// assert_eq!(result[4], 0.1);
/// ```
pub fn rolling_mean<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, "window")?;
    let period_t = T::from_usize(period)?;

    let mut output = vec![T::nan(); data.len()];
    let mut sum = CompensatedSum::default();
    let mut run = SameValueRun::default();

    for step in WindowWalk::new(data, period) {
        if !step.entering.is_nan() {
            sum.add(step.entering);
        }
        if let Some(leaving) = step.leaving.filter(|v| !v.is_nan()) {
            sum.add(-leaving);
        }
        run.push(step.entering);
        if step.window.is_some() {
            output[step.index] = if run.len >= period {
                step.entering
            } else {
                sum.total() / period_t
            };
        }
    }

    Ok(output)
}

/// Neumaier-compensated running sum.
///
/// Keeps the low-order bits lost by each addition in `compensation`, so a
/// large observation leaving the window does not erase the small ones that
/// remain.
#[derive(Debug, Clone, Copy, Default)]
struct CompensatedSum<T> {
    sum: T,
    compensation: T,
}

impl<T: SeriesElement> CompensatedSum<T> {
    fn add(&mut self, value: T) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation = self.compensation + ((self.sum - t) + value);
        } else {
            self.compensation = self.compensation + ((value - t) + self.sum);
        }
        self.sum = t;
    }

    fn total(&self) -> T {
        self.sum + self.compensation
    }
}

/// Length of the current run of identical consecutive observations.
#[derive(Debug, Clone, Copy, Default)]
struct SameValueRun<T> {
    last: T,
    len: usize,
}

impl<T: SeriesElement> SameValueRun<T> {
    fn push(&mut self, value: T) {
        if value.is_nan() {
            self.len = 0;
        } else if self.len > 0 && value == self.last {
            self.len += 1;
        } else {
            self.last = value;
            self.len = 1;
        }
    }
}

/// Rolling sample standard deviation (Bessel-corrected, divides by `n - 1`).
///
/// A window of identical values has a deviation of exactly zero. With
/// `period == 1` the sample deviation is undefined and every output is NaN.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
///
/// # Example
///
/// ```
/// use ta_series::kernels::rolling::rolling_std;
///
/// let data = vec![2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let result = rolling_std(&data, 8).unwrap();
/// assert!((result[7] - 2.138_089_935_299_395).abs() < 1e-12);
/// ```
pub fn rolling_std<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period, "window")?;
    let period_t = T::from_usize(period)?;
    let dof = period_t - T::one();

    rolling_apply(data, period, |window| {
        if period < 2 {
            return T::nan();
        }
        let first = window[0];
        if window.iter().all(|&v| v == first) {
            return T::zero();
        }

        let mean = window.iter().fold(T::zero(), |acc, &v| acc + v) / period_t;
        let sum_sq = window.iter().fold(T::zero(), |acc, &v| {
            let dev = v - mean;
            acc + dev * dev
        });
        (sum_sq / dof).sqrt()
    })
}

/// A monotonic deque for efficiently tracking rolling extrema.
///
/// Holds indices whose values are monotonically ordered (decreasing for max,
/// increasing for min), so the front is always the current extremum. NaN
/// observations are never pushed; the window walk reports NaN windows
/// separately.
#[derive(Debug, Clone)]
pub struct MonotonicDeque {
    deque: VecDeque<usize>,
    period: usize,
}

impl MonotonicDeque {
    /// Creates a new monotonic deque for windows of `period` observations.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self {
            deque: VecDeque::with_capacity(period),
            period,
        }
    }

    /// Pushes `data[index]`, keeping the front at the window maximum.
    #[inline]
    pub fn push_max<T: SeriesElement>(&mut self, index: usize, data: &[T]) {
        self.push_by(index, data, |incoming, back| incoming >= back);
    }

    /// Pushes `data[index]`, keeping the front at the window minimum.
    #[inline]
    pub fn push_min<T: SeriesElement>(&mut self, index: usize, data: &[T]) {
        self.push_by(index, data, |incoming, back| incoming <= back);
    }

    /// Returns the current extremum, or NaN if the deque is empty.
    #[inline]
    pub fn extremum<T: SeriesElement>(&self, data: &[T]) -> T {
        self.deque.front().map_or_else(T::nan, |&idx| data[idx])
    }

    fn push_by<T, F>(&mut self, index: usize, data: &[T], dominates: F)
    where
        T: SeriesElement,
        F: Fn(T, T) -> bool,
    {
        let value = data[index];
        if !value.is_nan() {
            while let Some(&back) = self.deque.back() {
                if dominates(value, data[back]) {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back(index);
        }

        if index + 1 >= self.period {
            let window_start = index + 1 - self.period;
            while self.deque.front().is_some_and(|&front| front < window_start) {
                self.deque.pop_front();
            }
        }
    }
}

/// Output structure containing both rolling maximum and minimum.
///
/// Both vectors have the same length as the input data.
#[derive(Debug, Clone)]
pub struct RollingExtremaOutput<T> {
    /// The rolling maximum values.
    pub max: Vec<T>,
    /// The rolling minimum values.
    pub min: Vec<T>,
}

/// Computes rolling maximum and minimum in a single pass.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn rolling_extrema<T: SeriesElement>(
    data: &[T],
    period: usize,
) -> Result<RollingExtremaOutput<T>> {
    validate_period(period, "window")?;

    let mut max = vec![T::nan(); data.len()];
    let mut min = vec![T::nan(); data.len()];
    let mut max_deque = MonotonicDeque::new(period);
    let mut min_deque = MonotonicDeque::new(period);

    for step in WindowWalk::new(data, period) {
        max_deque.push_max(step.index, data);
        min_deque.push_min(step.index, data);
        if step.window.is_some() {
            max[step.index] = max_deque.extremum(data);
            min[step.index] = min_deque.extremum(data);
        }
    }

    Ok(RollingExtremaOutput { max, min })
}

/// Rolling maximum over `period` observations.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn rolling_max<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rolling_extremum(data, period, MonotonicDeque::push_max)
}

/// Rolling minimum over `period` observations.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if `period` is zero.
pub fn rolling_min<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    rolling_extremum(data, period, MonotonicDeque::push_min)
}

fn rolling_extremum<T: SeriesElement>(
    data: &[T],
    period: usize,
    push: fn(&mut MonotonicDeque, usize, &[T]),
) -> Result<Vec<T>> {
    validate_period(period, "window")?;

    let mut output = vec![T::nan(); data.len()];
    let mut deque = MonotonicDeque::new(period);

    for step in WindowWalk::new(data, period) {
        push(&mut deque, step.index, data);
        if step.window.is_some() {
            output[step.index] = deque.extremum(data);
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, count_nan_prefix, EPSILON};

    fn naive<F: Fn(&[f64]) -> f64>(data: &[f64], period: usize, f: F) -> Vec<f64> {
        (0..data.len())
            .map(|i| {
                if i + 1 < period {
                    return f64::NAN;
                }
                let window = &data[i + 1 - period..=i];
                if window.iter().any(|v| v.is_nan()) {
                    f64::NAN
                } else {
                    f(window)
                }
            })
            .collect()
    }

    #[test]
    fn test_window_walk_reports_clean_windows() {
        let data = [1.0_f64, f64::NAN, 3.0, 4.0, 5.0];
        let complete: Vec<usize> = WindowWalk::new(&data, 2)
            .filter(|s| s.window.is_some())
            .map(|s| s.index)
            .collect();
        assert_eq!(complete, vec![3, 4]);
    }

    #[test]
    fn test_window_walk_leaving_values() {
        let data = [1.0_f64, 2.0, 3.0];
        let leaving: Vec<Option<f64>> = WindowWalk::new(&data, 2).map(|s| s.leaving).collect();
        assert_eq!(leaving, vec![None, None, Some(1.0)]);
    }

    #[test]
    fn test_rolling_mean_basic() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let result = rolling_mean(&data, 3).unwrap();
        assert_eq!(count_nan_prefix(&result), 2);
        assert!(approx_eq(result[2], 2.0, EPSILON));
        assert!(approx_eq(result[3], 3.0, EPSILON));
        assert!(approx_eq(result[4], 4.0, EPSILON));
    }

    #[test]
    fn test_rolling_mean_constant_window_is_exact() {
        for value in [0.1_f64, 0.7, 1e-3, 123.456] {
            let result = rolling_mean(&[value; 12], 3).unwrap();
            for &v in &result[2..] {
                assert_eq!(v, value);
            }
        }
    }

    #[test]
    fn test_rolling_mean_large_value_leaves_no_residue() {
        let result = rolling_mean(&[1e17_f64, 1.0, 1.0, 1.0], 2).unwrap();
        assert!(result[0].is_nan());
        assert_eq!(result[1], 5e16);
        assert_eq!(result[2], 1.0);
        assert_eq!(result[3], 1.0);

        let result = rolling_mean(&[1e17_f64, 1.0, 2.0, 3.0], 2).unwrap();
        assert_eq!(result[2], 1.5);
        assert_eq!(result[3], 2.5);
    }

    #[test]
    fn test_rolling_mean_run_restarts_after_nan() {
        let data = vec![2.0_f64, f64::NAN, 2.0, 2.0, 3.0];
        let result = rolling_mean(&data, 2).unwrap();
        assert!(result[2].is_nan());
        assert_eq!(result[3], 2.0);
        assert_eq!(result[4], 2.5);
    }

    #[test]
    fn test_rolling_mean_recovers_after_nan() {
        let data = vec![1.0_f64, 2.0, f64::NAN, 4.0, 5.0, 6.0];
        let result = rolling_mean(&data, 2).unwrap();
        assert!(approx_eq(result[1], 1.5, EPSILON));
        assert!(result[2].is_nan());
        assert!(result[3].is_nan());
        assert!(approx_eq(result[4], 4.5, EPSILON));
        assert!(approx_eq(result[5], 5.5, EPSILON));
    }

    #[test]
    fn test_rolling_mean_short_input_is_all_nan() {
        let result = rolling_mean(&[1.0_f64, 2.0], 5).unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_rolling_mean_empty_input() {
        assert!(rolling_mean::<f64>(&[], 3).unwrap().is_empty());
    }

    #[test]
    fn test_zero_period_rejected() {
        let data = [1.0_f64, 2.0];
        for result in [
            rolling_mean(&data, 0),
            rolling_std(&data, 0),
            rolling_max(&data, 0),
            rolling_min(&data, 0),
            rolling_apply(&data, 0, |w| w[0]),
        ] {
            assert!(matches!(
                result,
                Err(Error::InvalidPeriod { name: "window", period: 0, .. })
            ));
        }
    }

    #[test]
    fn test_rolling_extrema_match_naive() {
        let data = vec![
            5.0_f64, 3.0, 8.0, 8.0, 1.0, 9.0, 2.0, f64::NAN, 7.0, 6.0, 4.0, 4.0, 10.0,
        ];
        for period in 1..=5 {
            let max = rolling_max(&data, period).unwrap();
            let min = rolling_min(&data, period).unwrap();
            let expected_max = naive(&data, period, |w| w.iter().cloned().fold(f64::MIN, f64::max));
            let expected_min = naive(&data, period, |w| w.iter().cloned().fold(f64::MAX, f64::min));
            for i in 0..data.len() {
                assert!(approx_eq(max[i], expected_max[i], EPSILON), "max p={period} i={i}");
                assert!(approx_eq(min[i], expected_min[i], EPSILON), "min p={period} i={i}");
            }
        }
    }

    #[test]
    fn test_rolling_extrema_single_pass_matches_separate() {
        let data = vec![2.0_f64, 7.0, 1.0, 8.0, 2.0, 8.0, 1.0, 8.0];
        let both = rolling_extrema(&data, 3).unwrap();
        assert_eq!(
            format!("{:?}", both.max),
            format!("{:?}", rolling_max(&data, 3).unwrap())
        );
        assert_eq!(
            format!("{:?}", both.min),
            format!("{:?}", rolling_min(&data, 3).unwrap())
        );
    }

    #[test]
    fn test_rolling_std_matches_naive() {
        let data = vec![10.0_f64, 12.0, 9.5, 11.0, 13.5, 12.0, 10.5];
        let result = rolling_std(&data, 4).unwrap();
        let expected = naive(&data, 4, |w| {
            let mean = w.iter().sum::<f64>() / w.len() as f64;
            let ss: f64 = w.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (w.len() - 1) as f64).sqrt()
        });
        for i in 0..data.len() {
            assert!(approx_eq(result[i], expected[i], EPSILON));
        }
    }

    #[test]
    fn test_rolling_std_constant_is_exactly_zero() {
        let data = vec![0.1_f64; 6];
        let result = rolling_std(&data, 3).unwrap();
        for &v in &result[2..] {
            assert_eq!(v, 0.0);
        }
    }

    #[test]
    fn test_rolling_std_period_one_is_nan() {
        let result = rolling_std(&[1.0_f64, 2.0, 3.0], 1).unwrap();
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_rolling_apply_sees_chronological_window() {
        let data = vec![1.0_f64, 2.0, 3.0];
        let result = rolling_apply(&data, 3, |w| w[0] * 100.0 + w[2]).unwrap();
        assert_eq!(result[2], 103.0);
    }

    #[test]
    fn test_lookback_and_min_len() {
        assert_eq!(rolling_lookback(1), 0);
        assert_eq!(rolling_lookback(14), 13);
        assert_eq!(rolling_lookback(0), 0);
        assert_eq!(rolling_min_len(14), 14);
    }

    #[test]
    fn test_f32_support() {
        let data = vec![1.0_f32, 2.0, 3.0, 4.0];
        let result = rolling_mean(&data, 2).unwrap();
        assert!((result[3] - 3.5).abs() < 1e-6);
    }
}
