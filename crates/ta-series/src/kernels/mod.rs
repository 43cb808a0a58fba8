//! Shared computational kernels.
//!
//! Every indicator is built from one of two scans:
//!
//! - [`rolling`]: fixed-window aggregation (mean, sample deviation, extrema,
//!   arbitrary reductions). A window is defined only once it is complete and
//!   free of NaN, so every rolling indicator shares the same NaN prefix.
//! - [`ewm`]: the adjusted exponentially weighted mean, a single forward scan
//!   carrying one accumulator and one weight.
//!
//! Rolling extrema use a monotonic deque and run in O(n) regardless of the
//! window length.

pub mod ewm;
pub mod rolling;

pub use ewm::{ewm_mean, ewm_mean_with, Decay};
pub use rolling::{
    rolling_apply, rolling_extrema, rolling_lookback, rolling_max, rolling_mean, rolling_min,
    rolling_min_len, rolling_std, MonotonicDeque, RollingExtremaOutput,
};
