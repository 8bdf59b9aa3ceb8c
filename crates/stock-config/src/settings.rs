//! Configuration structures.

use serde::{Deserialize, Serialize};
use stock_analysis::ClassifierConfig;
use stock_core::error::StockError;
use stock_data::{GeneratorConfig, DEFAULT_DAYS};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl AppConfig {
    /// Check every section that has constraints.
    pub fn validate(&self) -> Result<(), StockError> {
        if self.generator.days < 1 {
            return Err(StockError::Config(
                "generator.days must be at least 1".into(),
            ));
        }
        self.generator.walk.validate()?;
        self.classifier.validate()?;
        Ok(())
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stock-analyzer".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Series generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Sessions to generate when the command line does not say
    pub days: usize,
    /// Fixed seed for reproducible series
    pub seed: Option<u64>,
    /// Artificial delay before generating, in milliseconds
    pub latency_ms: u64,
    /// Random-walk parameters
    pub walk: GeneratorConfig,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            seed: None,
            latency_ms: 0,
            walk: GeneratorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generator.days, 250);
    }

    #[test]
    fn test_validate_rejects_bad_sections() {
        let mut config = AppConfig::default();
        config.generator.days = 0;
        assert!(matches!(config.validate(), Err(StockError::Config(_))));

        let mut config = AppConfig::default();
        config.generator.walk.trend_period = 0;
        assert!(matches!(config.validate(), Err(StockError::Data(_))));

        let mut config = AppConfig::default();
        config.classifier.volume_contract_ratio = 0.0;
        assert!(matches!(config.validate(), Err(StockError::Analysis(_))));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let text = toml::to_string(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.generator.walk, GeneratorConfig::default());
        assert_eq!(parsed.classifier, ClassifierConfig::default());
    }
}
