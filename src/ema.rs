use std::{fmt::Display, num::NonZero};

use crate::{Indicator, IndicatorConfig, Price};

/// Configuration for the Exponential Moving Average ([`Ema`]) indicator.
///
/// Defaults to a length of 20, i.e. `α = 2 / 21`.
///
/// # Example
///
/// ```
/// use coinlens_ta::{EmaConfig, IndicatorConfig};
/// use std::num::NonZero;
///
/// let config = EmaConfig::new(NonZero::new(3).unwrap());
/// assert_eq!(config.length(), 3);
/// assert_eq!(config.alpha(), 0.5);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct EmaConfig {
    length: usize,
}

impl EmaConfig {
    #[must_use]
    pub const fn new(length: NonZero<usize>) -> Self {
        Self {
            length: length.get(),
        }
    }

    /// Smoothing factor `2 / (length + 1)`.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let length = self.length as f64;
        2.0 / (length + 1.0)
    }
}

impl IndicatorConfig for EmaConfig {
    const DEFAULT_LENGTH: NonZero<usize> = crate::DEFAULT_EMA_LENGTH;

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

impl Default for EmaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LENGTH)
    }
}

impl Display for EmaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EmaConfig({})", self.length)
    }
}

/// Exponential Moving Average (EMA).
///
/// A weighted moving average that gives more weight to recent prices, with
/// smoothing factor `α = 2 / (length + 1)`:
///
/// ```text
/// EMA₀ = price₀
/// EMAᵢ = α × priceᵢ + (1 − α) × EMAᵢ₋₁
/// ```
///
/// The average is seeded from the very first price rather than from an SMA
/// of the first `length` prices, so a value is available from the first
/// call. Early values lean heavily on that seed; the chart shows them
/// anyway.
///
/// # Example
///
/// ```
/// use coinlens_ta::{Ema, EmaConfig};
/// use std::num::NonZero;
///
/// let mut ema = Ema::new(EmaConfig::new(NonZero::new(3).unwrap()));
///
/// // Seeded from the first price
/// assert_eq!(ema.compute(2.0), Some(2.0));
///
/// // α = 0.5: 4 × 0.5 + 2 × 0.5 = 3
/// assert_eq!(ema.compute(4.0), Some(3.0));
/// assert_eq!(ema.compute(7.0), Some(5.0));
/// ```
#[derive(Clone, Debug)]
pub struct Ema {
    config: EmaConfig,
    alpha: f64,
    decay: f64,
    current: Option<Price>,
}

impl Indicator for Ema {
    type Config = EmaConfig;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        let alpha = config.alpha();

        Self {
            config,
            alpha,
            decay: 1.0 - alpha,
            current: None,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Option<Price> {
        let next = match self.current {
            Some(previous) => price.mul_add(self.alpha, previous * self.decay),
            None => price,
        };

        self.current = Some(next);
        self.current
    }

    #[inline]
    fn value(&self) -> Option<Price> {
        self.current
    }
}

impl Display for Ema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EMA({})", self.config.length)
    }
}
