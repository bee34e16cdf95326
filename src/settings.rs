use std::num::NonZero;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{DEFAULT_EMA_LENGTH, DEFAULT_RSI_LENGTH, DEFAULT_SMA_LENGTH, Error, Result};

/// Lookback lengths and visibility of the chart indicators.
///
/// Every field is optional in JSON; missing ones take the chart defaults
/// (RSI 14, SMA 20, EMA 20, all shown).
///
/// # Example
///
/// ```
/// use coinlens_ta::IndicatorSettings;
///
/// let settings = IndicatorSettings::from_json(r#"{ "sma_length": 50, "show": { "ema": false } }"#)?;
///
/// assert_eq!(settings.rsi_length.get(), 14);
/// assert_eq!(settings.sma_length.get(), 50);
/// assert!(!settings.show.ema);
/// # Ok::<(), coinlens_ta::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorSettings {
    pub rsi_length: NonZero<usize>,
    pub sma_length: NonZero<usize>,
    pub ema_length: NonZero<usize>,
    pub show: IndicatorToggles,
}

/// Which indicators are computed and drawn.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorToggles {
    pub rsi: bool,
    pub sma: bool,
    pub ema: bool,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            rsi_length: DEFAULT_RSI_LENGTH,
            sma_length: DEFAULT_SMA_LENGTH,
            ema_length: DEFAULT_EMA_LENGTH,
            show: IndicatorToggles::default(),
        }
    }
}

impl Default for IndicatorToggles {
    fn default() -> Self {
        Self {
            rsi: true,
            sma: true,
            ema: true,
        }
    }
}

impl IndicatorSettings {
    /// Longest lookback accepted for any indicator.
    pub const MAX_LENGTH: usize = 1_000;

    /// Parses settings from JSON and validates them.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] on malformed JSON, unknown fields, or a zero length;
    /// [`Error::InvalidSettings`] if a length exceeds [`Self::MAX_LENGTH`].
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;

        debug!(?settings, "loaded indicator settings");

        Ok(settings)
    }

    /// Checks every lookback length is within [`Self::MAX_LENGTH`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSettings`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (name, length) in [
            ("rsi_length", self.rsi_length),
            ("sma_length", self.sma_length),
            ("ema_length", self.ema_length),
        ] {
            if length.get() > Self::MAX_LENGTH {
                return Err(Error::InvalidSettings(format!(
                    "{name} = {length} exceeds maximum of {}",
                    Self::MAX_LENGTH
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod defaults {
        use super::*;

        #[test]
        fn match_chart_lengths() {
            let settings = IndicatorSettings::default();
            assert_eq!(settings.rsi_length.get(), 14);
            assert_eq!(settings.sma_length.get(), 20);
            assert_eq!(settings.ema_length.get(), 20);
            assert_eq!(settings.show, IndicatorToggles::default());
        }

        #[test]
        fn empty_object_gives_defaults() {
            let settings = IndicatorSettings::from_json("{}").unwrap();
            assert_eq!(settings, IndicatorSettings::default());
        }
    }

    mod from_json {
        use super::*;

        #[test]
        fn overrides_lengths_and_toggles() {
            let settings =
                IndicatorSettings::from_json(r#"{"rsi_length": 7, "show": {"rsi": false}}"#)
                    .unwrap();
            assert_eq!(settings.rsi_length.get(), 7);
            assert!(!settings.show.rsi);
            assert!(settings.show.sma);
        }

        #[test]
        fn rejects_zero_length() {
            let err = IndicatorSettings::from_json(r#"{"sma_length": 0}"#).unwrap_err();
            assert!(matches!(err, Error::Json(_)), "got {err:?}");
        }

        #[test]
        fn rejects_unknown_field() {
            let err = IndicatorSettings::from_json(r#"{"macd_length": 9}"#).unwrap_err();
            assert!(matches!(err, Error::Json(_)), "got {err:?}");
        }

        #[test]
        fn rejects_oversized_length() {
            let err = IndicatorSettings::from_json(r#"{"ema_length": 5000}"#).unwrap_err();
            assert_eq!(
                err.to_string(),
                "invalid settings: ema_length = 5000 exceeds maximum of 1000"
            );
        }
    }
}
