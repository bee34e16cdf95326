use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{IndicatorSeries, Price, Signal, interpret_indicator, interpret_trend};

/// Which indicator a [`IndicatorSnapshot`] describes.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndicatorKind {
    Rsi,
    Sma,
    Ema,
}

impl Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Rsi => "RSI",
            Self::Sma => "SMA",
            Self::Ema => "EMA",
        })
    }
}

/// Point-in-time summary of one indicator at the most recent price, as
/// shown on an indicator card.
///
/// `value` and `interpretation` are `None` when the series has no value at
/// its last position (history shorter than the lookback window).
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub kind: IndicatorKind,
    /// Latest value rounded to two decimals.
    pub value: Option<f64>,
    pub interpretation: Option<Signal>,
    pub description: String,
}

impl IndicatorSnapshot {
    /// RSI snapshot; interpreted with [`interpret_indicator`].
    #[must_use]
    pub fn rsi(series: &IndicatorSeries) -> Self {
        let latest = series.latest();

        Self {
            kind: IndicatorKind::Rsi,
            value: latest.map(round2),
            interpretation: latest.map(interpret_indicator),
            description: "Relative Strength Index measures momentum".to_owned(),
        }
    }

    /// SMA snapshot; bullish if `price` is above the latest average.
    #[must_use]
    pub fn sma(series: &IndicatorSeries, price: Price, length: usize) -> Self {
        Self::trend(
            IndicatorKind::Sma,
            series,
            price,
            format!("{length}-period Simple Moving Average"),
        )
    }

    /// EMA snapshot; bullish if `price` is above the latest average.
    #[must_use]
    pub fn ema(series: &IndicatorSeries, price: Price, length: usize) -> Self {
        Self::trend(
            IndicatorKind::Ema,
            series,
            price,
            format!("{length}-period Exponential Moving Average"),
        )
    }

    fn trend(
        kind: IndicatorKind,
        series: &IndicatorSeries,
        price: Price,
        description: String,
    ) -> Self {
        let latest = series.latest();

        Self {
            kind,
            value: latest.map(round2),
            interpretation: latest.map(|average| interpret_trend(price, average)),
            description,
        }
    }

    /// Display name: `RSI`, `SMA` or `EMA`.
    #[must_use]
    pub fn name(&self) -> String {
        self.kind.to_string()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
