use crate::Price;

use std::{
    fmt::{Debug, Display},
    hash::Hash,
    num::NonZero,
};

/// Configuration for a technical [`Indicator`].
///
/// Every indicator has a corresponding config type that holds its lookback
/// length. Configs are value types: cheap to clone, compare, and hash.
/// `Default` yields the length the price chart uses.
pub trait IndicatorConfig: Sized + Copy + PartialEq + Eq + Hash + Default + Display + Debug {
    /// Lookback length used by [`Default`].
    const DEFAULT_LENGTH: NonZero<usize>;

    /// Lookback window length (number of prices).
    fn length(&self) -> usize;
}

/// A streaming technical indicator.
///
/// Indicators keep internal state and update incrementally on each call to
/// [`compute`](Indicator::compute). Output is `None` until enough prices have
/// been seen for the indicator's lookback window.
///
/// The batch functions ([`compute_rsi`](crate::compute_rsi) and friends) fold
/// a fresh indicator over a price slice, so both paths produce identical
/// values.
///
/// # Example
///
/// ```
/// use coinlens_ta::{Indicator, Sma, SmaConfig};
/// use std::num::NonZero;
///
/// let mut sma = Sma::new(SmaConfig::new(NonZero::new(3).unwrap()));
///
/// assert_eq!(sma.compute(10.0), None);
/// assert_eq!(sma.compute(20.0), None);
/// assert_eq!(sma.compute(30.0), Some(20.0));
/// ```
pub trait Indicator: Sized + Clone + Display + Debug {
    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Computed output type.
    type Output: Copy + Send + Sync + Display + Debug;

    /// Creates a new indicator from the given config.
    fn new(config: Self::Config) -> Self;

    /// Feeds the next price and returns the updated indicator value,
    /// or `None` if the lookback window is not filled yet.
    fn compute(&mut self, price: Price) -> Option<Self::Output>;

    /// Returns the last computed value without advancing state.
    fn value(&self) -> Option<Self::Output>;
}
