//! Synthetic daily series generation.

mod generator;

pub use generator::{GeneratorConfig, SeriesGenerator, DEFAULT_DAYS};

use stock_core::error::DataError;
use stock_core::types::BarSeries;

/// Generate `days` bars for `symbol` with the default random walk.
pub fn generate(symbol: &str, days: usize) -> Result<BarSeries, DataError> {
    SeriesGenerator::default().generate(symbol, days)
}
