//! CLI command implementations.

pub mod analyze;
pub mod generate;
pub mod validate;

use std::time::Duration;

use anyhow::anyhow;
use stock_config::GeneratorSettings;
use stock_core::error::{ErrorKind, StockError};
use stock_data::SeriesGenerator;
use tracing::debug;

/// Prefix an error with the kind of problem so the user knows what to change.
pub(crate) fn labelled(err: impl Into<StockError>) -> anyhow::Error {
    let err = err.into();
    let label = match err.kind() {
        ErrorKind::InvalidArgument => "Invalid argument",
        ErrorKind::InsufficientData => "Not enough data",
        ErrorKind::Other => "Error",
    };
    anyhow!("{}: {}", label, err)
}

/// Trim and upper-case a ticker, rejecting blanks.
pub(crate) fn normalize_symbol(symbol: &str) -> anyhow::Result<String> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        anyhow::bail!("Please enter a stock symbol");
    }
    Ok(symbol.to_uppercase())
}

/// Build the generator from settings, letting a command-line seed win.
pub(crate) fn build_generator(
    settings: &GeneratorSettings,
    seed: Option<u64>,
) -> Result<SeriesGenerator, StockError> {
    let generator = SeriesGenerator::new(settings.walk.clone())?;
    Ok(match seed.or(settings.seed) {
        Some(seed) => generator.with_seed(seed),
        None => generator,
    })
}

/// Stand in for a remote data feed.
pub(crate) async fn simulate_latency(ms: u64) {
    if ms > 0 {
        debug!("Simulating {} ms of data latency", ms);
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
