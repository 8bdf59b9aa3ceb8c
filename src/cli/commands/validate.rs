//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use stock_config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Err(e.into());
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Default sessions: {}", config.generator.days);
    match config.generator.seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: random"),
    }
    println!("Trend period: {} sessions", config.generator.walk.trend_period);
    println!("Trend threshold: {}%", config.classifier.trend_threshold_pct);
    println!(
        "Volume bands: {}x / {}x",
        config.classifier.volume_contract_ratio, config.classifier.volume_expand_ratio
    );

    Ok(())
}
