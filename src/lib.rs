//! Technical indicators for crypto price charts.
//!
//! Given a coin's price history, computes RSI, SMA and EMA series aligned
//! index-for-index with the prices, and reads the latest values as
//! bullish, bearish or neutral. Positions before an indicator's lookback
//! window is filled are `None`, never a sentinel number.
//!
//! Two entry points share one implementation of each formula:
//!
//! - batch functions [`compute_rsi`], [`compute_sma`], [`compute_ema`] and
//!   [`analyze`] over a whole history;
//! - streaming indicators ([`Rsi`], [`Sma`], [`Ema`]) fed one price at a
//!   time. Each exposes [`new`](Sma::new), [`compute`](Sma::compute), and
//!   [`value`](Sma::value) as inherent methods, no trait import needed.
//!   Import [`Indicator`] only for generic code.
//!
//! Nothing here keeps global state: every call is independent and safe to
//! run in parallel.

mod analysis;
mod ema;
mod error;
mod indicator;
mod market_chart;
mod price;
mod price_window;
mod rsi;
mod series;
mod settings;
mod signal;
mod sma;
mod snapshot;

use std::num::NonZero;

pub use crate::analysis::{Analysis, ChartPoint, analyze};
pub use crate::error::{Error, Result};
pub use crate::indicator::{Indicator, IndicatorConfig};
pub use crate::market_chart::{MarketChart, TimeFrame};
pub use crate::price::{Price, PricePoint, PriceSample, Timestamp};
pub use crate::series::{IndicatorSeries, compute_ema, compute_rsi, compute_sma};
pub use crate::settings::{IndicatorSettings, IndicatorToggles};
pub use crate::signal::{RSI_OVERBOUGHT, RSI_OVERSOLD, Signal, interpret_indicator, interpret_trend};
pub use crate::snapshot::{IndicatorKind, IndicatorSnapshot};

pub use crate::ema::{Ema, EmaConfig};
pub use crate::rsi::{Rsi, RsiConfig};
pub use crate::sma::{Sma, SmaConfig};

/// RSI lookback used by the price chart.
pub const DEFAULT_RSI_LENGTH: NonZero<usize> = NonZero::new(14).unwrap();

/// SMA lookback used by the price chart.
pub const DEFAULT_SMA_LENGTH: NonZero<usize> = NonZero::new(20).unwrap();

/// EMA lookback used by the price chart.
pub const DEFAULT_EMA_LENGTH: NonZero<usize> = NonZero::new(20).unwrap();

macro_rules! impl_indicator_methods {
    ($type:ty, $config:ty, $output:ty) => {
        impl $type {
            /// See [`Indicator::new`].
            #[must_use]
            pub fn new(config: $config) -> Self {
                <Self as Indicator>::new(config)
            }

            /// See [`Indicator::compute`].
            #[inline]
            pub fn compute(&mut self, price: Price) -> Option<$output> {
                <Self as Indicator>::compute(self, price)
            }

            /// See [`Indicator::value`].
            #[must_use]
            #[inline]
            pub fn value(&self) -> Option<$output> {
                <Self as Indicator>::value(self)
            }
        }
    };
}

impl_indicator_methods!(Sma, SmaConfig, Price);
impl_indicator_methods!(Ema, EmaConfig, Price);
impl_indicator_methods!(Rsi, RsiConfig, Price);

#[cfg(test)]
mod test_util;

#[cfg(test)]
mod inherent_methods {
    use super::{Ema, EmaConfig, Rsi, RsiConfig, Sma, SmaConfig};
    use crate::test_util::nz;

    #[test]
    fn sma_without_indicator_import() {
        let mut sma = Sma::new(SmaConfig::new(nz(2)));
        assert_eq!(sma.compute(10.0), None);
        assert_eq!(sma.compute(20.0), Some(15.0));
        assert_eq!(sma.value(), Some(15.0));
    }

    #[test]
    fn ema_without_indicator_import() {
        let mut ema = Ema::new(EmaConfig::new(nz(2)));
        assert_eq!(ema.compute(10.0), Some(10.0));
        assert!(ema.value().is_some());
    }

    #[test]
    fn rsi_without_indicator_import() {
        let mut rsi = Rsi::new(RsiConfig::new(nz(1)));
        assert_eq!(rsi.compute(10.0), None);
        assert_eq!(rsi.compute(11.0), Some(100.0));
        assert_eq!(rsi.value(), Some(100.0));
    }

    #[test]
    fn indicators_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Sma>();
        assert_send_sync::<Ema>();
        assert_send_sync::<Rsi>();
        assert_send_sync::<crate::Analysis>();
    }
}
