//! CLI definitions.

pub mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use stock_config::{load_config_or_default, AppConfig};

#[derive(Parser)]
#[command(name = "stock-analyzer")]
#[command(author, version)]
#[command(about = "Synthetic daily price series and rule-based technical analysis")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configuration file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a series and print its analysis
    Analyze(AnalyzeArgs),
    /// Generate a series and print it as JSON
    Generate(GenerateArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Ticker symbol
    #[arg(short, long)]
    pub symbol: String,

    /// Sessions to generate (defaults to the configured value)
    #[arg(short, long)]
    pub days: Option<usize>,

    /// Seed for a reproducible series
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Save the JSON report to a file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Ticker symbol
    #[arg(short, long)]
    pub symbol: String,

    /// Sessions to generate (defaults to the configured value)
    #[arg(short, long)]
    pub days: Option<usize>,

    /// Seed for a reproducible series
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only print the most recent N sessions
    #[arg(short, long)]
    pub period: Option<usize>,

    /// Include moving-average overlays
    #[arg(long)]
    pub with_ma: bool,
}

/// Load the configuration, using defaults for a missing file.
pub fn load_or_default(path: &Path) -> Result<AppConfig> {
    let config = load_config_or_default(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
