use serde::{Deserialize, Serialize};

/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
pub type Price = f64;

/// Sample timestamp in unix milliseconds, as reported by the market-data
/// provider.
pub type Timestamp = u64;

/// A single point of a coin's price history.
///
/// Implement this on your own row type to feed it to
/// [`analyze`](crate::analyze) without converting. Indicators only read
/// [`price`](PricePoint::price); the timestamp and volume are carried through
/// to the chart rows.
///
/// # Example
///
/// ```
/// use coinlens_ta::{Price, PricePoint, Timestamp};
///
/// struct Row {
///     ts: u64,
///     usd: f64,
/// }
///
/// impl PricePoint for Row {
///     fn timestamp(&self) -> Timestamp { self.ts }
///     fn price(&self) -> Price { self.usd }
/// }
/// ```
pub trait PricePoint {
    /// When the price was sampled.
    fn timestamp(&self) -> Timestamp;

    /// Sampled price.
    fn price(&self) -> Price;

    /// Traded volume at the sample, if the provider reported one.
    fn volume(&self) -> Option<f64> {
        None
    }
}

/// Owned [`PricePoint`], as decoded from a
/// [`MarketChart`](crate::MarketChart) payload.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PriceSample {
    pub timestamp: Timestamp,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl PriceSample {
    #[must_use]
    pub fn new(timestamp: Timestamp, price: Price) -> Self {
        Self {
            timestamp,
            price,
            volume: None,
        }
    }

    #[must_use]
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }
}

impl PricePoint for PriceSample {
    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    fn price(&self) -> Price {
        self.price
    }

    fn volume(&self) -> Option<f64> {
        self.volume
    }
}
