use std::{fmt::Display, num::NonZero};

use crate::{Indicator, IndicatorConfig, Price, price_window::PriceWindow};

/// Configuration for the Simple Moving Average ([`Sma`]) indicator.
///
/// Defaults to a 20-price window.
///
/// # Example
///
/// ```rust
/// use coinlens_ta::{IndicatorConfig, SmaConfig};
/// use std::num::NonZero;
///
/// let config = SmaConfig::new(NonZero::new(50).unwrap());
/// assert_eq!(config.length(), 50);
/// assert_eq!(SmaConfig::default().length(), 20);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct SmaConfig {
    length: usize,
}

impl SmaConfig {
    #[must_use]
    pub const fn new(length: NonZero<usize>) -> Self {
        Self {
            length: length.get(),
        }
    }
}

impl IndicatorConfig for SmaConfig {
    const DEFAULT_LENGTH: NonZero<usize> = crate::DEFAULT_SMA_LENGTH;

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LENGTH)
    }
}

impl Display for SmaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SmaConfig({})", self.length)
    }
}

/// Simple Moving Average (SMA).
///
/// Computes the unweighted mean of the last *n* prices, where *n* is the
/// configured window length. Returns `None` until the window is full.
///
/// Uses a running sum for O(1) updates per price.
///
/// # Example
///
/// ```rust
/// use coinlens_ta::{Sma, SmaConfig};
/// use std::num::NonZero;
///
/// let mut sma = Sma::new(SmaConfig::new(NonZero::new(3).unwrap()));
///
/// assert_eq!(sma.compute(10.0), None);
/// assert_eq!(sma.compute(20.0), None);
/// assert_eq!(sma.compute(30.0), Some(20.0));
/// ```
#[derive(Clone, Debug)]
pub struct Sma {
    config: SmaConfig,
    window: PriceWindow,
    length: f64,
    current: Option<Price>,
}

impl Indicator for Sma {
    type Config = SmaConfig;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            window: PriceWindow::new(config.length),
            #[allow(clippy::cast_precision_loss)]
            length: config.length as f64,
            current: None,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Option<Price> {
        self.window.add(price);

        self.current = self.window.sum().map(|sum| sum / self.length);

        self.current
    }

    #[inline]
    fn value(&self) -> Option<Price> {
        self.current
    }
}

impl Display for Sma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SMA({})", self.config.length)
    }
}
