//! Analyze command implementation.

use anyhow::{Context, Result};
use stock_analysis::StockAnalyzer;
use stock_config::AppConfig;
use tracing::info;

use super::{build_generator, labelled, normalize_symbol, simulate_latency};
use crate::cli::{AnalyzeArgs, OutputFormat};

pub async fn run(args: AnalyzeArgs, config: &AppConfig) -> Result<()> {
    let symbol = normalize_symbol(&args.symbol)?;
    let days = args.days.unwrap_or(config.generator.days);
    info!("Analyzing {} over {} sessions", symbol, days);

    let generator = build_generator(&config.generator, args.seed).map_err(labelled)?;
    let analyzer = StockAnalyzer::new(config.classifier.clone()).map_err(labelled)?;

    simulate_latency(config.generator.latency_ms).await;
    let report = analyzer
        .analyze_source(&generator, &symbol, days)
        .map_err(labelled)?;

    // Output results
    match args.output {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => println!("{}", report.summary()),
    }

    // Save if requested
    if let Some(save_path) = &args.save {
        let json = report.to_json()?;
        std::fs::write(save_path, json)
            .with_context(|| format!("Failed to write {}", save_path.display()))?;
        info!("Report saved to {:?}", save_path);
    }

    Ok(())
}
