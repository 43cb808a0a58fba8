//! Adjusted exponentially weighted mean.
//!
//! This kernel underlies EMA, the RSI gain/loss smoothing, the MACD lines and
//! the EMA flavour of Stochastic %D.
//!
//! # Algorithm
//!
//! The value at `i` is the weighted average of every observation so far, with
//! weight `(1 - α)^k` on the observation `k` steps back:
//!
//! ```text
//! EWM[i] = Σ (1-α)^k · x[i-k]  /  Σ (1-α)^k
//! ```
//!
//! It is computed in one forward scan carrying the current mean and the total
//! weight of the past, so it is seeded by the leading values themselves
//! rather than by the first observation alone. Once the weights converge the
//! recursion is the familiar `EWM[i] = α·x[i] + (1-α)·EWM[i-1]`.
//!
//! # Missing data
//!
//! NaN observations contribute nothing, but older weights keep decaying across
//! them (weights follow absolute position). The previous mean is reported at a
//! NaN position once enough observations have been seen. Leading NaNs are
//! skipped, so the mean of a series with a NaN warm-up (like a MACD line)
//! starts at its first defined value.
//!
//! # Minimum periods
//!
//! Output is NaN until `min_periods` non-NaN observations have been seen.
//!
//! # Example
//!
//! ```
//! use ta_series::kernels::ewm::{ewm_mean, Decay};
//!
//! let data = vec![1.0_f64, 2.0, 3.0];
//! let alpha: f64 = Decay::Span(3).alpha().unwrap(); // 0.5
//! let result = ewm_mean(&data, alpha, 1).unwrap();
//!
//! assert_eq!(result[0], 1.0);
//! // (2 + 0.5·1) / 1.5
//! assert!((result[1] - 5.0 / 3.0).abs() < 1e-12);
//! ```

use crate::error::{Error, Result};
use crate::traits::{validate_period, SeriesElement};

/// Parameterizations of the exponential decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decay {
    /// Span `n`: `α = 2 / (n + 1)`. Used by EMA and MACD.
    Span(usize),
    /// Center of mass `c`: `α = 1 / (c + 1)`. RSI uses `c = n - 1`.
    CenterOfMass(f64),
    /// Smoothing factor given directly, `0 < α ≤ 1`.
    Alpha(f64),
}

impl Decay {
    /// Center-of-mass decay equivalent to Wilder's smoothing over `period`
    /// observations (`α = 1 / period`).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is zero.
    pub fn wilder(period: usize) -> Result<Self> {
        validate_period(period, "period")?;
        Ok(Self::CenterOfMass((period - 1) as f64))
    }

    /// Converts the decay into a smoothing factor `α`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidPeriod` for a zero span
    /// - `Error::InvalidParameter` for a negative or non-finite center of
    ///   mass, or an `α` outside `(0, 1]`
    pub fn alpha<T: SeriesElement>(self) -> Result<T> {
        match self {
            Self::Span(span) => {
                validate_period(span, "span")?;
                Ok(T::two() / T::from_usize(span + 1)?)
            }
            Self::CenterOfMass(com) => {
                if !com.is_finite() || com < 0.0 {
                    tracing::debug!(parameter = "center of mass", com, "rejected center of mass");
                    return Err(Error::InvalidParameter {
                        name: "center of mass",
                        reason: "must be finite and non-negative",
                    });
                }
                Ok(T::one() / (T::from_f64(com)? + T::one()))
            }
            Self::Alpha(alpha) => {
                if !(alpha > 0.0 && alpha <= 1.0) {
                    tracing::debug!(parameter = "alpha", alpha, "rejected smoothing factor");
                    return Err(Error::InvalidParameter {
                        name: "alpha",
                        reason: "must satisfy 0 < alpha <= 1",
                    });
                }
                T::from_f64(alpha)
            }
        }
    }
}

/// Computes the adjusted exponentially weighted mean of `data`.
///
/// `min_periods` of zero is treated as one.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `alpha` is not in `(0, 1]`.
pub fn ewm_mean<T: SeriesElement>(data: &[T], alpha: T, min_periods: usize) -> Result<Vec<T>> {
    if !(alpha > T::zero() && alpha <= T::one()) {
        tracing::debug!(parameter = "alpha", "rejected smoothing factor");
        return Err(Error::InvalidParameter {
            name: "alpha",
            reason: "must satisfy 0 < alpha <= 1",
        });
    }

    let min_periods = min_periods.max(1);
    let decay = T::one() - alpha;

    let mut output = Vec::with_capacity(data.len());
    let mut mean = T::nan();
    let mut old_weight = T::one();
    let mut observations = 0usize;

    for &value in data {
        let observed = !value.is_nan();
        if observed {
            observations += 1;
        }

        if !mean.is_nan() {
            old_weight = old_weight * decay;
            if observed {
                // Skipping equal values keeps constant runs exact.
                if mean != value {
                    mean = (old_weight * mean + value) / (old_weight + T::one());
                }
                old_weight = old_weight + T::one();
            }
        } else if observed {
            mean = value;
        }

        output.push(if observations >= min_periods {
            mean
        } else {
            T::nan()
        });
    }

    Ok(output)
}

/// Computes the adjusted exponentially weighted mean for a [`Decay`].
///
/// # Errors
///
/// Propagates the validation errors of [`Decay::alpha`].
pub fn ewm_mean_with<T: SeriesElement>(
    data: &[T],
    decay: Decay,
    min_periods: usize,
) -> Result<Vec<T>> {
    let alpha = decay.alpha()?;
    ewm_mean(data, alpha, min_periods)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    /// Direct evaluation of the weighted-average definition (no NaNs).
    fn adjusted_direct(data: &[f64], alpha: f64) -> Vec<f64> {
        (0..data.len())
            .map(|i| {
                let mut num = 0.0;
                let mut den = 0.0;
                for k in 0..=i {
                    let w = (1.0 - alpha).powi(k as i32);
                    num += w * data[i - k];
                    den += w;
                }
                num / den
            })
            .collect()
    }

    #[test]
    fn test_decay_alpha_values() {
        assert!(approx_eq(Decay::Span(9).alpha::<f64>().unwrap(), 0.2, EPSILON));
        assert!(approx_eq(
            Decay::CenterOfMass(13.0).alpha::<f64>().unwrap(),
            1.0 / 14.0,
            EPSILON
        ));
        assert!(approx_eq(Decay::Alpha(0.3).alpha::<f64>().unwrap(), 0.3, EPSILON));
        assert_eq!(Decay::wilder(14).unwrap(), Decay::CenterOfMass(13.0));
    }

    #[test]
    fn test_decay_validation() {
        assert!(matches!(
            Decay::Span(0).alpha::<f64>(),
            Err(Error::InvalidPeriod { name: "span", .. })
        ));
        assert!(matches!(
            Decay::CenterOfMass(-1.0).alpha::<f64>(),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(Decay::Alpha(0.0).alpha::<f64>().is_err());
        assert!(Decay::Alpha(1.5).alpha::<f64>().is_err());
        assert!(Decay::Alpha(f64::NAN).alpha::<f64>().is_err());
        assert!(Decay::Alpha(1.0).alpha::<f64>().is_ok());
        assert!(Decay::wilder(0).is_err());
    }

    #[test]
    fn test_ewm_matches_direct_definition() {
        let data = vec![22.27, 22.19, 22.08, 22.17, 22.18, 22.13, 22.23, 22.43, 22.24, 22.29];
        let alpha = 2.0 / 11.0;
        let result = ewm_mean(&data, alpha, 1).unwrap();
        let expected = adjusted_direct(&data, alpha);
        for i in 0..data.len() {
            assert!(approx_eq(result[i], expected[i], 1e-12), "index {i}");
        }
    }

    #[test]
    fn test_ewm_min_periods() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let result = ewm_mean(&data, 0.5, 3).unwrap();
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert!(!result[2].is_nan());
        // Zero behaves like one.
        let result = ewm_mean(&data, 0.5, 0).unwrap();
        assert_eq!(result[0], 1.0);
    }

    #[test]
    fn test_ewm_constant_series_is_exact() {
        let data = vec![0.1_f64; 50];
        let result = ewm_mean(&data, 2.0 / 11.0, 10).unwrap();
        for &v in &result[9..] {
            assert_eq!(v, 0.1);
        }
    }

    #[test]
    fn test_ewm_skips_leading_nans() {
        let data = vec![f64::NAN, f64::NAN, 4.0, 6.0];
        let result = ewm_mean(&data, 0.5, 2).unwrap();
        assert!(result[2].is_nan());
        // (6 + 0.5·4) / 1.5
        assert!(approx_eq(result[3], 16.0 / 3.0, EPSILON));
    }

    #[test]
    fn test_ewm_nan_gap_ages_weights() {
        let data = vec![4.0_f64, f64::NAN, 6.0];
        let result = ewm_mean(&data, 0.5, 1).unwrap();
        assert_eq!(result[1], 4.0);
        // weights: 0.25 on 4.0, 1.0 on 6.0
        assert!(approx_eq(result[2], (0.25 * 4.0 + 6.0) / 1.25, EPSILON));
    }

    #[test]
    fn test_ewm_alpha_one_tracks_input() {
        let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0];
        let result = ewm_mean(&data, 1.0, 1).unwrap();
        assert_eq!(result, data);
    }

    #[test]
    fn test_ewm_rejects_bad_alpha() {
        assert!(ewm_mean(&[1.0_f64], 0.0, 1).is_err());
        assert!(ewm_mean(&[1.0_f64], f64::NAN, 1).is_err());
    }

    #[test]
    fn test_ewm_empty() {
        assert!(ewm_mean::<f64>(&[], 0.5, 1).unwrap().is_empty());
    }

    #[test]
    fn test_ewm_with_decay() {
        let data = vec![1.0_f64, 2.0, 3.0];
        let a = ewm_mean_with(&data, Decay::Span(3), 1).unwrap();
        let b = ewm_mean(&data, 0.5, 1).unwrap();
        assert_eq!(a, b);
    }
}
