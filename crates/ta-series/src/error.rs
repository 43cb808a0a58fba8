//! Error types for ta-series.
//!
//! Every error here is an invalid-configuration or invalid-input condition
//! detected before any computation starts. Insufficient history is never an
//! error: those positions are NaN in the output. Degenerate arithmetic (a zero
//! price range, zero smoothed losses) is not an error either and propagates as
//! IEEE infinity or NaN.

use thiserror::Error;

/// The main error type for ta-series operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A window, span or period parameter is invalid.
    ///
    /// Returned when a period is zero. `name` identifies the offending
    /// parameter (e.g. `"k_period"`, `"slow_period"`).
    #[error("invalid {name} {period}: {reason}")]
    InvalidPeriod {
        /// Name of the parameter that was rejected.
        name: &'static str,
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// A non-period numeric parameter is invalid.
    ///
    /// Covers a non-finite band multiplier, a smoothing factor outside
    /// `(0, 1]` and a negative center of mass.
    #[error("invalid {name}: {reason}")]
    InvalidParameter {
        /// Name of the parameter that was rejected.
        name: &'static str,
        /// Description of why the value is invalid.
        reason: &'static str,
    },

    /// An unsupported moving-average method name was requested.
    #[error("unsupported moving average '{name}': only SMA, WMA and EMA are available")]
    UnknownMovingAverage {
        /// The name that failed to parse.
        name: String,
    },

    /// A price table does not contain the requested column.
    #[error("missing column '{column}' in price table")]
    MissingColumn {
        /// The column name that was looked up.
        column: String,
    },

    /// A column (or the index) does not match the length of the price table.
    #[error("length mismatch for '{column}': expected {expected} rows, got {actual}")]
    LengthMismatch {
        /// Name of the column (or `"index"`) with the wrong length.
        column: String,
        /// Number of rows in the table.
        expected: usize,
        /// Number of rows supplied.
        actual: usize,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when using `NumCast::from()` to convert values
    /// (e.g., converting a `usize` period to a generic `Float` type) and
    /// the conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

impl Error {
    /// Returns `true` for errors caused by caller-supplied parameters.
    ///
    /// Table shape problems and numeric conversion failures are not
    /// configuration errors.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidPeriod { .. }
                | Self::InvalidParameter { .. }
                | Self::UnknownMovingAverage { .. }
        )
    }
}

/// Convenience type alias for Results using the ta-series Error type.
pub type Result<T> = std::result::Result<T, Error>;
