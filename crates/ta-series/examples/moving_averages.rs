//! Moving Average Examples
//!
//! Compares SMA, WMA and EMA over the same series, then uses each of them as
//! the %D smoothing of a Stochastic Oscillator.
//!
//! Run with: `cargo run --example moving_averages`

use ta_series::indicators::{ema, sma, stochastic, wma, MovingAverage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let prices: Vec<f64> = vec![
        44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03, 45.61,
        46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64, 46.21, 46.25, 45.71, 46.45, 45.78,
    ];

    let period = 5;
    let sma_values = sma(&prices, period)?;
    let wma_values = wma(&prices, period)?;
    let ema_values = ema(&prices, period)?;

    println!("=== Moving averages, period {period} ===");
    println!();
    println!("  {:>5} {:>8} {:>8} {:>8} {:>8}", "Index", "Price", "SMA", "WMA", "EMA");
    for (i, price) in prices.iter().enumerate() {
        println!(
            "  {i:>5} {price:>8.2} {:>8.3} {:>8.3} {:>8.3}",
            sma_values[i], wma_values[i], ema_values[i]
        );
    }

    println!();
    println!("=== Stochastic (10, 3) %D by method ===");
    println!();
    for method in MovingAverage::ALL {
        let output = stochastic(&prices, 10, 3, method)?;
        let last = output.d.last().copied().unwrap_or(f64::NAN);
        println!("  {method}: latest %K {:>6.2}, %D {last:>6.2}", output.k[prices.len() - 1]);
    }

    // Method names are parsed case-insensitively
    let method: MovingAverage = "wma".parse()?;
    println!();
    println!("Parsed method: {method}");

    Ok(())
}
