//! Moving-average selection.
//!
//! Some indicators smooth an intermediate series with a caller-chosen moving
//! average (Stochastic %D). [`MovingAverage`] names the choice and dispatches
//! to the matching indicator.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::indicators::{ema::ema, sma::sma, wma::wma};
use crate::traits::SeriesElement;

/// A moving-average method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovingAverage {
    /// Simple moving average.
    #[default]
    Sma,
    /// Linearly weighted moving average.
    Wma,
    /// Exponential moving average (span = period, `min_periods` = period).
    Ema,
}

impl MovingAverage {
    /// Every supported method.
    pub const ALL: [Self; 3] = [Self::Sma, Self::Wma, Self::Ema];

    /// Short lowercase name (`"sma"`, `"wma"`, `"ema"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sma => "sma",
            Self::Wma => "wma",
            Self::Ema => "ema",
        }
    }

    /// Applies the moving average over `period` observations.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` if `period` is zero.
    pub fn apply<T: SeriesElement>(self, data: &[T], period: usize) -> Result<Vec<T>> {
        match self {
            Self::Sma => sma(data, period),
            Self::Wma => wma(data, period),
            Self::Ema => ema(data, period),
        }
    }
}

impl fmt::Display for MovingAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

impl FromStr for MovingAverage {
    type Err = Error;

    /// Parses a method name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|method| s.eq_ignore_ascii_case(method.as_str()))
            .ok_or_else(|| {
                tracing::debug!(parameter = "method", name = s, "rejected moving average name");
                Error::UnknownMovingAverage {
                    name: s.to_string(),
                }
            })
    }
}
