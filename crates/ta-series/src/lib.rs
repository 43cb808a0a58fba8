//! ta-series: technical analysis indicators over price series
//!
//! This crate computes classical technical analysis indicators from a
//! complete, time-ordered price history. Every indicator is a pure function:
//! the output is aligned index-for-index with the input and NaN marks the
//! positions without enough history.
//!
//! # Features
//!
//! - **Generics**: Works with both `f32` and `f64` data types
//! - **Aligned output**: Output length always equals input length
//! - **Price tables**: Named columns (`Open`, `High`, `Low`, `Close`, ...)
//!   sharing one index
//! - **Shared kernels**: One rolling-window scan and one exponential scan
//!   back every indicator
//!
//! # Quick Start
//!
//! ```
//! use ta_series::indicators::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! // First 2 values are NaN (lookback period)
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert!((result[2] - 2.0).abs() < 1e-10);
//! ```
//!
//! # Available Indicators
//!
//! ## Moving Averages
//! - [`indicators::sma()`]: Simple Moving Average
//! - [`indicators::wma()`]: Weighted Moving Average
//! - [`indicators::ema()`]: Exponential Moving Average
//!
//! ## Momentum
//! - [`indicators::rsi()`]: Relative Strength Index
//! - [`indicators::stochastic()`]: Stochastic Oscillator
//! - [`indicators::macd()`]: Moving Average Convergence Divergence
//!
//! ## Volatility
//! - [`indicators::bollinger()`]: Bollinger Bands
//!
//! # Error Handling
//!
//! Only invalid configuration is an error. A series too short for the
//! requested window is not:
//!
//! ```
//! use ta_series::indicators::sma;
//! use ta_series::Error;
//!
//! let short_data = vec![1.0_f64, 2.0];
//! let result = sma(&short_data, 10).unwrap();
//! assert!(result.iter().all(|v| v.is_nan()));
//!
//! assert!(matches!(sma(&short_data, 0), Err(Error::InvalidPeriod { .. })));
//! ```
//!
//! # Logging
//!
//! Rejected configurations emit a `debug` event through [`tracing`] before
//! the error is returned. The crate installs no subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod table;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use table::PriceTable;
pub use traits::SeriesElement;
pub use utils::{
    approx_eq, approx_eq_relative, count_nan_prefix, count_nans, first_defined, series_approx_eq,
    EPSILON, LOOSE_EPSILON,
};
