//! Technical analysis indicators.
//!
//! All indicators in this module share the following properties:
//!
//! - **Generic**: Work with both `f32` and `f64` via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Aligned**: Every output has exactly the length of its input; NaN marks
//!   positions without enough history
//! - **Lenient on length**: An input shorter than the lookback yields an
//!   all-NaN output rather than an error
//!
//! Each indicator comes as a series function, a price-table function that
//! selects columns by name, and a configuration type with defaults.
//!
//! # Moving Averages
//!
//! - [`sma`] - Simple Moving Average
//! - [`wma`] - Weighted Moving Average (linear weights)
//! - [`ema`] - Exponential Moving Average (adjusted)
//!
//! # Oscillators
//!
//! - [`rsi`] - Relative Strength Index (Wilder smoothing)
//! - [`stochastic`] - Stochastic Oscillator with SMA, WMA or EMA %D
//! - [`macd`] - Moving Average Convergence Divergence
//!
//! # Volatility
//!
//! - [`bollinger`] - Bollinger Bands over the typical price
//!
//! # Example
//!
//! ```
//! use ta_series::indicators::{bollinger_bands, relative_strength_index};
//! use ta_series::table::PriceTable;
//!
//! let close: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.5).sin()).collect();
//! let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
//! let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
//! let table = PriceTable::from_hlc(high, low, close).unwrap();
//!
//! let rsi = relative_strength_index(&table, 14, "Close").unwrap();
//! let bands = bollinger_bands(&table, 20, 2.0).unwrap();
//! assert_eq!(rsi.len(), 40);
//! assert_eq!(bands.len(), 40);
//! ```

pub mod bollinger;
pub mod ema;
pub mod ma;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod wma;

pub use bollinger::{
    bollinger, bollinger_bands, bollinger_lookback, bollinger_min_len, typical_price, Bollinger,
    BollingerOutput,
};
pub use ema::{ema, ema_lookback, ema_min_len, ema_with_min_periods, exponential_moving_average, Ema};
pub use ma::MovingAverage;
pub use macd::{
    macd, macd_line_lookback, macd_min_len, macd_signal_lookback,
    moving_average_convergence_divergence, Macd, MacdOutput,
};
pub use rsi::{relative_strength_index, rsi, rsi_lookback, rsi_min_len, Rsi};
pub use sma::{simple_moving_average, sma, sma_lookback, sma_min_len, Sma};
pub use stochastic::{
    stochastic, stochastic_d_lookback, stochastic_k_lookback, stochastic_min_len,
    stochastic_oscillator, Stochastic, StochasticOutput,
};
pub use wma::{weighted_moving_average, wma, wma_lookback, wma_min_len, wma_weights, Wma};
