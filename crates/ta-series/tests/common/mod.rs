//! Shared test utilities for ta-series integration tests.

use ta_series::PriceTable;

/// Approximate equality that treats two NaNs as equal.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for values accumulated over many steps.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Verify that the first `n` values are NaN and the rest are not.
#[allow(dead_code)]
pub fn verify_nan_prefix(data: &[f64], expected_nan_count: usize) -> bool {
    data.iter()
        .enumerate()
        .all(|(i, v)| v.is_nan() == (i < expected_nan_count))
}

/// Forty daily closes with a rally, a pullback and a recovery.
#[allow(dead_code)]
pub fn sample_close() -> Vec<f64> {
    vec![
        44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03, 45.61,
        46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64, 46.21, 46.25, 45.71, 46.45, 45.78, 45.35,
        44.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13, 43.50, 44.10, 44.85, 45.20, 45.02, 45.66,
        46.10,
    ]
}

/// A High/Low/Close table built around [`sample_close`], indexed by day.
#[allow(dead_code)]
pub fn sample_table() -> PriceTable<f64> {
    let close = sample_close();
    let high = close.iter().map(|c| c + 0.4).collect();
    let low = close.iter().map(|c| c - 0.3).collect();
    let index = (0..close.len() as i64).map(|d| 1_700_000_000 + d * 86_400).collect();
    PriceTable::from_hlc(high, low, close)
        .and_then(|table| table.with_index(index))
        .expect("sample table is well formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_nan_prefix() {
        let data = vec![f64::NAN, f64::NAN, 1.0, 2.0, 3.0];
        assert!(verify_nan_prefix(&data, 2));
        assert!(!verify_nan_prefix(&data, 3));
        assert!(!verify_nan_prefix(&data, 1));
    }

    #[test]
    fn test_sample_table_shape() {
        let table = sample_table();
        assert_eq!(table.len(), 40);
        assert_eq!(table.index().map(<[i64]>::len), Some(40));
    }
}
