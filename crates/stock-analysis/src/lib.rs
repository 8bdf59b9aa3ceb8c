//! Rule-based market classification.
//!
//! This crate turns a daily series into:
//! - Structured readings: moving-average posture, trend, volume, advice
//! - Narrative panels rendered from those readings
//! - A stricter bull/bear market character
//! - A combined report for display or JSON output

mod analyzer;
mod character;
mod classifier;
mod config;
mod narrative;
mod readings;
mod report;

pub use analyzer::{analyze, StockAnalyzer, LONG_TERM_WINDOW};
pub use character::{CharacterDetails, MarketCharacter, MIN_CHARACTER_BARS};
pub use classifier::{MarketClassifier, MIN_ANALYSIS_BARS, TREND_LOOKBACK, VOLUME_WINDOW};
pub use config::ClassifierConfig;
pub use narrative::AnalysisResult;
pub use readings::{
    Advice, AdviceReading, Classification, MaAlignment, PricePosition, PriceVolume, Signals,
    TechnicalReading, TrendDirection, TrendReading, VolumeChange, VolumeReading,
};
pub use report::AnalysisReport;
