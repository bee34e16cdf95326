use std::num::NonZero;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    IndicatorSeries, IndicatorSettings, IndicatorSnapshot, Price, PricePoint, Timestamp,
    compute_ema, compute_rsi, compute_sma,
};

/// One row of the price chart: the sample plus the indicator overlays at
/// the same position.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp: Timestamp,
    pub price: Price,
    pub volume: Option<f64>,
    pub rsi: Option<Price>,
    pub sma: Option<Price>,
    pub ema: Option<Price>,
}

/// Indicator series, chart rows and indicator cards for one price history.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Analysis {
    pub rsi: IndicatorSeries,
    pub sma: IndicatorSeries,
    pub ema: IndicatorSeries,
    pub chart: Vec<ChartPoint>,
    /// One snapshot per enabled indicator, in RSI, SMA, EMA order. Empty for
    /// an empty history.
    pub snapshots: Vec<IndicatorSnapshot>,
}

/// Runs every enabled indicator over `points`.
///
/// Disabled indicators yield an all-`None` series and no snapshot. All
/// series and the chart have exactly `points.len()` entries.
///
/// # Example
///
/// ```
/// use coinlens_ta::{IndicatorSettings, PriceSample, Signal, analyze};
///
/// let history: Vec<_> = (0..30)
///     .map(|i| PriceSample::new(i * 3_600_000, 100.0 + i as f64))
///     .collect();
///
/// let analysis = analyze(&history, &IndicatorSettings::default());
///
/// assert_eq!(analysis.chart.len(), 30);
/// assert_eq!(analysis.snapshots.len(), 3);
/// assert_eq!(analysis.snapshots[0].interpretation, Some(Signal::Bearish));
/// ```
#[instrument(level = "debug", skip_all, fields(points = points.len()))]
pub fn analyze<P: PricePoint>(points: &[P], settings: &IndicatorSettings) -> Analysis {
    let prices: Vec<Price> = points.iter().map(PricePoint::price).collect();
    let show = settings.show;

    if show.rsi && prices.len() <= settings.rsi_length.get() {
        debug!(
            length = settings.rsi_length.get(),
            "history shorter than RSI window, no RSI values"
        );
    }

    let series = |enabled: bool,
                  compute: fn(&[Price], NonZero<usize>) -> IndicatorSeries,
                  length: NonZero<usize>| {
        if enabled {
            compute(&prices, length)
        } else {
            IndicatorSeries::unavailable(prices.len())
        }
    };

    let rsi = series(show.rsi, compute_rsi, settings.rsi_length);
    let sma = series(show.sma, compute_sma, settings.sma_length);
    let ema = series(show.ema, compute_ema, settings.ema_length);

    let chart = points
        .iter()
        .enumerate()
        .map(|(i, point)| ChartPoint {
            timestamp: point.timestamp(),
            price: point.price(),
            volume: point.volume(),
            rsi: rsi.get(i),
            sma: sma.get(i),
            ema: ema.get(i),
        })
        .collect();

    let mut snapshots = Vec::with_capacity(3);
    if let Some(&latest_price) = prices.last() {
        if show.rsi {
            snapshots.push(IndicatorSnapshot::rsi(&rsi));
        }
        if show.sma {
            snapshots.push(IndicatorSnapshot::sma(
                &sma,
                latest_price,
                settings.sma_length.get(),
            ));
        }
        if show.ema {
            snapshots.push(IndicatorSnapshot::ema(
                &ema,
                latest_price,
                settings.ema_length.get(),
            ));
        }
    }

    Analysis {
        rsi,
        sma,
        ema,
        chart,
        snapshots,
    }
}
