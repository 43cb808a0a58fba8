//! Commonly used types and functions for convenient importing.
//!
//! ```
//! use ta_series::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! let sma_result = sma(&prices, 3).unwrap();
//! let ema_result = ema(&prices, 3).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//! let stoch = stochastic(&prices, 5, 3, MovingAverage::Wma).unwrap();
//! assert_eq!(stoch.len(), sma_result.len());
//! assert_eq!(ema_result.len(), rsi_result.len());
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::SeriesElement;

// Price table
pub use crate::table::{PriceTable, CLOSE, HIGH, LOW, OPEN, VOLUME};

// Series functions
pub use crate::indicators::{bollinger, ema, macd, rsi, sma, stochastic, typical_price, wma};

// Table functions
pub use crate::indicators::{
    bollinger_bands, exponential_moving_average, moving_average_convergence_divergence,
    relative_strength_index, simple_moving_average, stochastic_oscillator,
    weighted_moving_average,
};

// Configuration types
pub use crate::indicators::{Bollinger, Ema, Macd, MovingAverage, Rsi, Sma, Stochastic, Wma};

// Output types
pub use crate::indicators::{BollingerOutput, MacdOutput, StochasticOutput};

// Lookback functions
pub use crate::indicators::{
    bollinger_lookback, ema_lookback, macd_line_lookback, macd_signal_lookback, rsi_lookback,
    sma_lookback, stochastic_d_lookback, stochastic_k_lookback, wma_lookback,
};
