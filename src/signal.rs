use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Price;

/// RSI above this reads as overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// RSI below this reads as oversold.
pub const RSI_OVERSOLD: f64 = 30.0;

/// Qualitative read of an indicator value.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Bullish,
    Bearish,
    Neutral,
}

impl Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        })
    }
}

/// Interprets an RSI value.
///
/// Overbought (`> 70`) is bearish, oversold (`< 30`) is bullish, anything
/// in between, both thresholds included, is neutral.
///
/// # Example
///
/// ```
/// use coinlens_ta::{Signal, interpret_indicator};
///
/// assert_eq!(interpret_indicator(71.0), Signal::Bearish);
/// assert_eq!(interpret_indicator(70.0), Signal::Neutral);
/// assert_eq!(interpret_indicator(29.0), Signal::Bullish);
/// ```
#[must_use]
pub fn interpret_indicator(rsi: f64) -> Signal {
    if rsi > RSI_OVERBOUGHT {
        Signal::Bearish
    } else if rsi < RSI_OVERSOLD {
        Signal::Bullish
    } else {
        Signal::Neutral
    }
}

/// Interprets a moving average against the current price.
///
/// Bullish when the price is strictly above the average, bearish otherwise.
/// There is no neutral band: a price sitting exactly on the average reads
/// bearish.
#[must_use]
pub fn interpret_trend(price: Price, average: Price) -> Signal {
    if price > average {
        Signal::Bullish
    } else {
        Signal::Bearish
    }
}
