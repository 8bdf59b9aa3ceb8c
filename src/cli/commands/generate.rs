//! Generate command implementation.

use anyhow::Result;
use serde::Serialize;
use stock_config::AppConfig;
use stock_core::types::Bar;
use stock_indicators::{price_overlays, volume_overlays, Overlay};
use tracing::info;

use super::{build_generator, labelled, normalize_symbol, simulate_latency};
use crate::cli::GenerateArgs;

#[derive(Serialize)]
struct SeriesOutput<'a> {
    symbol: &'a str,
    bars: &'a [Bar],
    #[serde(skip_serializing_if = "Option::is_none")]
    price_ma: Option<Vec<Overlay>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume_ma: Option<Vec<Overlay>>,
}

pub async fn run(args: GenerateArgs, config: &AppConfig) -> Result<()> {
    let symbol = normalize_symbol(&args.symbol)?;
    let days = args.days.unwrap_or(config.generator.days);

    let generator = build_generator(&config.generator, args.seed).map_err(labelled)?;
    simulate_latency(config.generator.latency_ms).await;
    let series = generator.generate(&symbol, days).map_err(labelled)?;

    // Averages are taken over the visible window only, like the chart.
    let visible = match args.period {
        Some(0) => anyhow::bail!("Invalid argument: period must be at least 1"),
        Some(period) => series.tail(period),
        None => series,
    };
    info!("Generated {} sessions for {}", visible.len(), symbol);

    let (price_ma, volume_ma) = if args.with_ma {
        (
            Some(price_overlays(&visible).map_err(labelled)?),
            Some(volume_overlays(&visible).map_err(labelled)?),
        )
    } else {
        (None, None)
    };

    let output = SeriesOutput {
        symbol: &visible.symbol,
        bars: visible.bars(),
        price_ma,
        volume_ma,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
