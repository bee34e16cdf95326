mod fixtures;

use coinlens_ta::{DEFAULT_SMA_LENGTH, compute_sma};

use crate::fixtures::{
    assert_series_matches, load_ref_values, load_reference_history, load_reference_prices,
};

/// Tolerance: 1e-6.
/// Running sum accumulates rounding drift against a fresh window sum.
const TOLERANCE: f64 = 1e-6;

#[test]
fn sma_20_matches_reference() {
    let history = load_reference_history();
    let reference = load_ref_values("tests/fixtures/data/sma-20.csv");

    let sma = compute_sma(&load_reference_prices(), DEFAULT_SMA_LENGTH);

    assert_series_matches("SMA(20)", &sma, &history, &reference, TOLERANCE);
}

#[test]
fn sma_first_value_at_window_end() {
    let sma = compute_sma(&load_reference_prices(), DEFAULT_SMA_LENGTH);
    assert_eq!(sma.first_available(), Some(19));
}
