use std::num::NonZero;

use serde::{Deserialize, Serialize};

use crate::{Ema, EmaConfig, Indicator, Price, Rsi, RsiConfig, Sma, SmaConfig};

/// Indicator values aligned index-for-index with the input prices.
///
/// Position `i` holds the value computed from prices `0..=i` only. `None`
/// marks a position before the indicator's lookback window is filled, so a
/// genuine `0.0` is never confused with "not yet available".
///
/// Serializes as an array of numbers and `null`s.
///
/// # Example
///
/// ```
/// use coinlens_ta::compute_sma;
/// use std::num::NonZero;
///
/// let sma = compute_sma(&[1.0, 2.0, 3.0, 4.0, 5.0], NonZero::new(3).unwrap());
///
/// assert_eq!(sma.len(), 5);
/// assert_eq!(sma.get(1), None);
/// assert_eq!(sma.get(2), Some(2.0));
/// assert_eq!(sma.latest(), Some(4.0));
/// assert_eq!(sma.first_available(), Some(2));
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorSeries(Vec<Option<Price>>);

impl IndicatorSeries {
    /// Runs `indicator` over `prices`, recording one output per price.
    pub(crate) fn from_indicator<I>(mut indicator: I, prices: &[Price]) -> Self
    where
        I: Indicator<Output = Price>,
    {
        Self(prices.iter().map(|&price| indicator.compute(price)).collect())
    }

    /// Series of `len` unavailable values.
    #[must_use]
    pub fn unavailable(len: usize) -> Self {
        Self(vec![None; len])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `index`, or `None` if it is out of range or not available.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Price> {
        self.0.get(index).copied().flatten()
    }

    /// Value at the most recent position.
    #[must_use]
    pub fn latest(&self) -> Option<Price> {
        self.0.last().copied().flatten()
    }

    /// Index of the first available value.
    #[must_use]
    pub fn first_available(&self) -> Option<usize> {
        self.0.iter().position(Option::is_some)
    }

    /// Iterates every position, placeholders included.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Option<Price>> + '_ {
        self.0.iter().copied()
    }

    /// Iterates `(index, value)` for available positions only.
    pub fn available(&self) -> impl Iterator<Item = (usize, Price)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, value)| value.map(|v| (i, v)))
    }

    /// Values by position, `None` where the indicator is unavailable.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<Price>] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Option<Price>> {
        self.0
    }
}

impl From<Vec<Option<Price>>> for IndicatorSeries {
    fn from(values: Vec<Option<Price>>) -> Self {
        Self(values)
    }
}

impl<'a> IntoIterator for &'a IndicatorSeries {
    type Item = Option<Price>;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Option<Price>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// Relative Strength Index of `prices` with Wilder's smoothing.
///
/// The first value lands at index `length`; earlier positions are `None`.
/// A history shorter than `length + 1` prices yields only `None`s.
/// See [`Rsi`] for the formula.
#[must_use]
pub fn compute_rsi(prices: &[Price], length: NonZero<usize>) -> IndicatorSeries {
    IndicatorSeries::from_indicator(Rsi::new(RsiConfig::new(length)), prices)
}

/// Simple Moving Average of `prices`; first value at index `length - 1`.
#[must_use]
pub fn compute_sma(prices: &[Price], length: NonZero<usize>) -> IndicatorSeries {
    IndicatorSeries::from_indicator(Sma::new(SmaConfig::new(length)), prices)
}

/// Exponential Moving Average of `prices`, seeded from `prices[0]`.
///
/// Every position of a non-empty input is available.
#[must_use]
pub fn compute_ema(prices: &[Price], length: NonZero<usize>) -> IndicatorSeries {
    IndicatorSeries::from_indicator(Ema::new(EmaConfig::new(length)), prices)
}
