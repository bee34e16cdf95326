mod fixtures;

use coinlens_ta::{DEFAULT_EMA_LENGTH, compute_ema};

use crate::fixtures::{
    assert_series_matches, load_ref_values, load_reference_history, load_reference_prices,
};

/// Tolerance: 1e-6.
/// Fused multiply-add rounds differently from the plain recurrence.
const TOLERANCE: f64 = 1e-6;

#[test]
fn ema_20_matches_reference() {
    let history = load_reference_history();
    let reference = load_ref_values("tests/fixtures/data/ema-20.csv");

    let ema = compute_ema(&load_reference_prices(), DEFAULT_EMA_LENGTH);

    assert_series_matches("EMA(20)", &ema, &history, &reference, TOLERANCE);
}

#[test]
#[allow(clippy::float_cmp)]
fn ema_seeded_from_first_price() {
    let prices = load_reference_prices();
    let ema = compute_ema(&prices, DEFAULT_EMA_LENGTH);
    assert_eq!(ema.get(0), Some(prices[0]));
}
