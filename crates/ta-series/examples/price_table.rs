//! Price Table Examples
//!
//! Builds a High/Low/Close table and runs RSI, Bollinger Bands and MACD over
//! it through the column-selecting entry points and configuration types.
//!
//! Run with: `cargo run --example price_table`

use ta_series::indicators::{
    bollinger_bands, relative_strength_index, stochastic_oscillator, Macd,
};
use ta_series::table::{PriceTable, CLOSE};
use ta_series::Error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let close: Vec<f64> = (0..60)
        .map(|i| 100.0 + (f64::from(i) * 0.35).sin() * 4.0 + f64::from(i) * 0.1)
        .collect();
    let high: Vec<f64> = close.iter().map(|c| c + 0.8).collect();
    let low: Vec<f64> = close.iter().map(|c| c - 0.6).collect();
    let days = (0..60).map(|d| 1_704_067_200 + d * 86_400).collect();

    let table = PriceTable::from_hlc(high, low, close)?.with_index(days)?;

    let rsi = relative_strength_index(&table, 14, CLOSE)?;
    let bands = bollinger_bands(&table, 20, 2.0)?;
    let macd = Macd::new().compute_table(&table)?;

    println!(
        "  {:>10} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Day", "RSI", "Lower", "Upper", "MACD", "Signal"
    );
    let index = table.index().unwrap_or_default();
    for i in (0..table.len()).step_by(5) {
        println!(
            "  {:>10} {:>8.2} {:>8.2} {:>8.2} {:>8.3} {:>8.3}",
            index.get(i).copied().unwrap_or_default(),
            rsi[i],
            bands.lower[i],
            bands.upper[i],
            macd.macd[i],
            macd.signal[i],
        );
    }

    println!();
    println!("=== Configuration errors ===");
    match stochastic_oscillator(&table, 14, 3, CLOSE, "hma") {
        Err(err @ Error::UnknownMovingAverage { .. }) => println!("  {err}"),
        other => println!("  unexpected: {other:?}"),
    }
    if let Err(err) = relative_strength_index(&table, 14, "Adj Close") {
        println!("  {err}");
    }

    Ok(())
}
