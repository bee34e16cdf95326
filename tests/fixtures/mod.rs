#![allow(dead_code)]

use coinlens_ta::{IndicatorSeries, Price, PricePoint, Timestamp};
use serde::{Deserialize, de::DeserializeOwned};

/// Hourly BTC/USD sample.
#[derive(Debug, Clone, Deserialize)]
pub struct RefSample {
    pub timestamp: u64,
    pub price: f64,
    pub volume: f64,
}

impl PricePoint for RefSample {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn price(&self) -> Price {
        self.price
    }

    fn volume(&self) -> Option<f64> {
        Some(self.volume)
    }
}

/// Reference value with timestamp. Only positions where the indicator is
/// available are listed.
#[derive(Debug, Deserialize)]
pub struct RefValue {
    pub timestamp: u64,
    pub expected: f64,
}

const HISTORY_PATH: &str = "tests/fixtures/data/btc-usd-1h.csv";

/// Load the reference price history.
pub fn load_reference_history() -> Vec<RefSample> {
    load_records(HISTORY_PATH, "invalid history record")
}

/// Prices of the reference history, in order.
pub fn load_reference_prices() -> Vec<f64> {
    load_reference_history().iter().map(|s| s.price).collect()
}

/// Load single-value reference data.
pub fn load_ref_values(path: &str) -> Vec<RefValue> {
    load_records(path, "invalid reference record")
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

/// Checks `series` against the reference file: every listed timestamp has a
/// matching value, and every unlisted position is unavailable.
pub fn assert_series_matches(
    name: &str,
    series: &IndicatorSeries,
    history: &[RefSample],
    reference: &[RefValue],
    tolerance: f64,
) {
    assert_eq!(series.len(), history.len(), "{name}: length mismatch");

    let mut ref_idx = 0;
    for (i, sample) in history.iter().enumerate() {
        let listed = reference
            .get(ref_idx)
            .is_some_and(|r| r.timestamp == sample.timestamp);

        match (series.get(i), listed) {
            (Some(value), true) => {
                assert_near(
                    value,
                    reference[ref_idx].expected,
                    tolerance,
                    &format!("{name} at index {i} (t={})", sample.timestamp),
                );
                ref_idx += 1;
            }
            (None, false) => {}
            (value, listed) => {
                panic!("{name} availability mismatch at index {i}: got {value:?}, listed={listed}")
            }
        }
    }

    assert_eq!(
        ref_idx,
        reference.len(),
        "{name}: not all reference values checked: {ref_idx}/{}",
        reference.len()
    );
}

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
