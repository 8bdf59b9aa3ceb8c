//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, GeneratorSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// Environment variables use the `STOCK__` prefix with `__` between
/// sections, e.g. `STOCK__GENERATOR__DAYS=120`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    build(path, true)
}

/// Like [`load_config`], but a missing file falls back to the defaults.
/// Environment overrides still apply.
pub fn load_config_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    build(path, false)
}

fn build(path: &Path, required: bool) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(
            Environment::with_prefix("STOCK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
