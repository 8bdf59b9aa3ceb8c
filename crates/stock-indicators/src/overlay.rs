//! Moving-average overlays for charting.

use serde::{Deserialize, Serialize};
use stock_core::error::IndicatorError;
use stock_core::types::BarSeries;

use crate::moving_average::sma;

/// Windows drawn over closing prices.
pub const PRICE_WINDOWS: [usize; 5] = [5, 10, 20, 60, 250];

/// Windows drawn over volume.
pub const VOLUME_WINDOWS: [usize; 2] = [5, 10];

/// One moving-average line, aligned with the series dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    /// Legend label, e.g. `MA20` or `VOL_MA5`
    pub label: String,
    /// Window size
    pub window: usize,
    /// One entry per bar; `None` until the window is full
    pub values: Vec<Option<f64>>,
}

/// Moving averages of the closing price for every window in [`PRICE_WINDOWS`].
pub fn price_overlays(series: &BarSeries) -> Result<Vec<Overlay>, IndicatorError> {
    build("MA", &PRICE_WINDOWS, &series.closes())
}

/// Moving averages of volume for every window in [`VOLUME_WINDOWS`].
pub fn volume_overlays(series: &BarSeries) -> Result<Vec<Overlay>, IndicatorError> {
    build("VOL_MA", &VOLUME_WINDOWS, &series.volumes())
}

fn build(prefix: &str, windows: &[usize], values: &[f64]) -> Result<Vec<Overlay>, IndicatorError> {
    windows
        .iter()
        .map(|&window| {
            Ok(Overlay {
                label: format!("{}{}", prefix, window),
                window,
                values: sma(window, values)?,
            })
        })
        .collect()
}
