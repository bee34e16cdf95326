use std::{fmt::Display, num::NonZero};

use crate::{Indicator, IndicatorConfig, Price};

/// Configuration for the Relative Strength Index ([`Rsi`]) indicator.
///
/// RSI uses Wilder's smoothing, which has infinite memory: the SMA seed
/// (first `length` price changes) influences all subsequent values. Output
/// begins at the `length + 1`-th price. Defaults to a length of 14.
///
/// # Example
///
/// ```
/// use coinlens_ta::{IndicatorConfig, RsiConfig};
/// use std::num::NonZero;
///
/// let config = RsiConfig::new(NonZero::new(7).unwrap());
/// assert_eq!(config.length(), 7);
/// assert_eq!(RsiConfig::default().length(), 14);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct RsiConfig {
    length: usize,
}

impl RsiConfig {
    #[must_use]
    pub const fn new(length: NonZero<usize>) -> Self {
        Self {
            length: length.get(),
        }
    }
}

impl IndicatorConfig for RsiConfig {
    const DEFAULT_LENGTH: NonZero<usize> = crate::DEFAULT_RSI_LENGTH;

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LENGTH)
    }
}

impl Display for RsiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RsiConfig({})", self.length)
    }
}

#[derive(Clone, Debug)]
enum RsiPhase {
    Seeding {
        sum_gain: f64,
        sum_loss: f64,
        seen_changes: usize,
    },
    Active {
        avg_gain: f64,
        avg_loss: f64,
    },
    // Seed window had no losses: pinned at 100 from then on.
    OneSided,
}

/// Relative Strength Index (RSI) with Wilder's smoothing.
///
/// Measures the speed and magnitude of recent price changes on a 0–100
/// scale. Values above 70 are conventionally read as overbought; below 30,
/// oversold (see [`interpret_indicator`](crate::interpret_indicator)).
///
/// The first `length` price changes are averaged with a simple mean (SMA
/// seed). After seeding, gains and losses are smoothed with Wilder's method
/// (`α = 1 / length`):
///
/// ```text
/// avg_gain = (prev_avg_gain × (length − 1) + gain) / length
/// avg_loss = (prev_avg_loss × (length − 1) + loss) / length
/// RSI      = 100 − 100 / (1 + avg_gain / avg_loss)
/// ```
///
/// If the seed window has no losses, the value is 100 at every position from
/// the seed onward, whatever follows. Once smoothing is active, a later
/// `avg_loss` of zero also reads 100. A flat history therefore reads 100,
/// never `NaN`.
///
/// # Example
///
/// ```
/// use coinlens_ta::{Rsi, RsiConfig};
/// use std::num::NonZero;
///
/// let mut rsi = Rsi::new(RsiConfig::new(NonZero::new(3).unwrap()));
///
/// // Seeding: need 3 price changes (4 prices)
/// assert_eq!(rsi.compute(10.0), None);
/// assert_eq!(rsi.compute(12.0), None);
/// assert_eq!(rsi.compute(11.0), None);
///
/// // changes = +2, −1, +2 → avg_gain=4/3, avg_loss=1/3 → RSI=80
/// let value = rsi.compute(13.0).unwrap();
/// assert!((value - 80.0).abs() < 1e-10);
/// ```
#[derive(Clone, Debug)]
pub struct Rsi {
    config: RsiConfig,
    prev_price: Option<Price>,
    phase: RsiPhase,
    current: Option<Price>,
    length: f64,
    length_minus_one: f64,
}

impl Indicator for Rsi {
    type Config = RsiConfig;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            prev_price: None,
            phase: RsiPhase::Seeding {
                sum_gain: 0.0,
                sum_loss: 0.0,
                seen_changes: 0,
            },
            current: None,
            #[allow(clippy::cast_precision_loss)]
            length: config.length() as f64,
            #[allow(clippy::cast_precision_loss)]
            length_minus_one: (config.length() - 1) as f64,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Option<Self::Output> {
        let Some(prev_price) = self.prev_price.replace(price) else {
            return None;
        };

        let (gain, loss) = Self::gain_and_loss(prev_price, price);

        self.current = match &mut self.phase {
            RsiPhase::Seeding {
                sum_gain,
                sum_loss,
                seen_changes,
            } => {
                *sum_gain += gain;
                *sum_loss += loss;
                *seen_changes += 1;

                if *seen_changes == self.config.length() {
                    let avg_gain = *sum_gain / self.length;
                    let avg_loss = *sum_loss / self.length;

                    self.phase = if avg_loss == 0.0 {
                        RsiPhase::OneSided
                    } else {
                        RsiPhase::Active { avg_gain, avg_loss }
                    };

                    Some(Self::rsi_from_averages(avg_gain, avg_loss))
                } else {
                    None
                }
            }

            RsiPhase::Active { avg_gain, avg_loss } => {
                *avg_gain = avg_gain.mul_add(self.length_minus_one, gain) / self.length;
                *avg_loss = avg_loss.mul_add(self.length_minus_one, loss) / self.length;

                Some(Self::rsi_from_averages(*avg_gain, *avg_loss))
            }

            RsiPhase::OneSided => Some(100.0),
        };

        self.current
    }

    #[inline]
    fn value(&self) -> Option<Self::Output> {
        self.current
    }
}

impl Rsi {
    #[inline]
    fn gain_and_loss(prev_price: Price, price: Price) -> (Price, Price) {
        let change = price - prev_price;
        let gain = change.max(0.0);
        let loss = (-change).max(0.0);

        (gain, loss)
    }

    #[inline]
    fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            return 100.0;
        }

        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

impl Display for Rsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RSI({})", self.config.length)
    }
}
