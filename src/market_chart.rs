use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::{Error, PriceSample, Result, Timestamp};

/// Chart window offered for a coin's price history.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum TimeFrame {
    #[serde(rename = "24h")]
    #[default]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
}

impl TimeFrame {
    /// Number of days of history to request from the market-data provider.
    #[must_use]
    pub fn days(self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
        }
    }
}

impl Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Day => "24h",
            Self::Week => "7d",
            Self::Month => "30d",
        })
    }
}

/// Historical market chart of one coin, as returned by the market-data
/// provider's `market_chart` endpoint.
///
/// Each series is a list of `[timestamp_ms, value]` pairs in chronological
/// order. Only prices are required; volumes are attached by position.
///
/// # Example
///
/// ```
/// use coinlens_ta::MarketChart;
///
/// let chart = MarketChart::from_json(
///     r#"{"prices": [[1700000000000, 36500.5], [1700003600000, 36612.0]],
///         "total_volumes": [[1700000000000, 1.2e10]]}"#,
/// )?;
///
/// let samples = chart.samples();
/// assert_eq!(samples.len(), 2);
/// assert_eq!(samples[0].volume, Some(1.2e10));
/// assert_eq!(samples[1].volume, None);
/// # Ok::<(), coinlens_ta::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct MarketChart {
    samples: Vec<PriceSample>,
    has_volumes: bool,
}

#[derive(Deserialize)]
struct RawMarketChart {
    prices: Vec<[f64; 2]>,
    #[serde(default)]
    total_volumes: Vec<[f64; 2]>,
}

impl MarketChart {
    /// Decodes and validates a `market_chart` payload.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] if the payload is not an object with a `prices` list
    /// of number pairs; [`Error::MalformedPoint`] for a negative or
    /// fractional timestamp, or a negative price.
    #[instrument(level = "debug", skip(json), fields(bytes = json.len()))]
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawMarketChart = serde_json::from_str(json)?;

        let timestamps = raw
            .prices
            .iter()
            .enumerate()
            .map(|(index, &[ts, price])| {
                if price < 0.0 {
                    return Err(Error::MalformedPoint {
                        field: "prices",
                        index,
                        reason: "negative price",
                    });
                }
                to_timestamp(ts).ok_or(Error::MalformedPoint {
                    field: "prices",
                    index,
                    reason: "timestamp is not a non-negative integer",
                })
            })
            .collect::<Result<Vec<Timestamp>>>()?;

        if !raw.total_volumes.is_empty() && raw.total_volumes.len() != raw.prices.len() {
            warn!(
                prices = raw.prices.len(),
                volumes = raw.total_volumes.len(),
                "volume series misaligned with prices; unmatched samples carry no volume"
            );
        }

        let samples = raw
            .prices
            .iter()
            .zip(timestamps)
            .enumerate()
            .map(|(index, (&[_, price], timestamp))| PriceSample {
                timestamp,
                price,
                volume: raw.total_volumes.get(index).map(|&[_, volume]| volume),
            })
            .collect();

        Ok(Self {
            samples,
            has_volumes: !raw.total_volumes.is_empty(),
        })
    }

    /// Price history with volumes attached by position.
    #[must_use]
    pub fn samples(&self) -> &[PriceSample] {
        &self.samples
    }

    /// Consumes the chart, returning its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<PriceSample> {
        self.samples
    }

    /// Just the prices, in chronological order.
    #[must_use]
    pub fn prices(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.price).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn has_volumes(&self) -> bool {
        self.has_volumes
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn to_timestamp(value: f64) -> Option<Timestamp> {
    // u64::MAX rounds up to 2^64 as f64, so the bound is exclusive
    (value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64)
        .then(|| value as Timestamp)
}
