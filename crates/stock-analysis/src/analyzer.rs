//! Analysis entry point.

use stock_core::error::{AnalysisError, StockResult};
use stock_core::traits::SeriesSource;
use stock_core::types::BarSeries;
use stock_indicators::mean_of_last_n;
use tracing::info;

use crate::character::{MarketCharacter, MIN_CHARACTER_BARS};
use crate::classifier::{require, MarketClassifier, MIN_ANALYSIS_BARS};
use crate::config::ClassifierConfig;
use crate::narrative::AnalysisResult;
use crate::readings::Classification;
use crate::report::AnalysisReport;

/// Window of the long-term (yearly) average.
pub const LONG_TERM_WINDOW: usize = 250;

/// Turns a series into narrative panels and reports.
#[derive(Debug, Clone, Default)]
pub struct StockAnalyzer {
    classifier: MarketClassifier,
}

impl StockAnalyzer {
    /// Create an analyzer with validated thresholds.
    pub fn new(config: ClassifierConfig) -> Result<Self, AnalysisError> {
        Ok(Self {
            classifier: MarketClassifier::new(config)?,
        })
    }

    /// Get the underlying classifier.
    pub fn classifier(&self) -> &MarketClassifier {
        &self.classifier
    }

    /// The four narrative panels. Needs at least 60 bars.
    pub fn analyze(&self, series: &BarSeries) -> Result<AnalysisResult, AnalysisError> {
        Ok(AnalysisResult::from(&self.classifier.classify(series)?))
    }

    /// Structured readings behind the panels. Needs at least 60 bars.
    pub fn classify(&self, series: &BarSeries) -> Result<Classification, AnalysisError> {
        self.classifier.classify(series)
    }

    /// Bull/bear market test. Needs at least 61 bars.
    pub fn market_character(&self, series: &BarSeries) -> Result<MarketCharacter, AnalysisError> {
        self.classifier.market_character(series)
    }

    /// Everything at once.
    ///
    /// Fails below 60 bars. Between 60 and 249 bars the report is partial:
    /// `character` is `None` at exactly 60 bars and `long_term_average` is
    /// `None` below 250.
    pub fn report(&self, series: &BarSeries) -> Result<AnalysisReport, AnalysisError> {
        require(series, MIN_ANALYSIS_BARS)?;

        let classification = self.classifier.classify(series)?;
        let character = if series.len() >= MIN_CHARACTER_BARS {
            Some(self.classifier.market_character(series)?)
        } else {
            None
        };
        let long_term_average = if series.len() >= LONG_TERM_WINDOW {
            Some(mean_of_last_n(LONG_TERM_WINDOW, &series.closes())?)
        } else {
            None
        };

        let last = series.last().ok_or(AnalysisError::InsufficientData {
            required: MIN_ANALYSIS_BARS,
            available: 0,
        })?;

        Ok(AnalysisReport {
            symbol: series.symbol.clone(),
            as_of: last.date,
            last_close: last.close,
            bars: series.len(),
            analysis: AnalysisResult::from(&classification),
            classification,
            character,
            long_term_average,
        })
    }

    /// Load a series from `source` and report on it.
    pub fn analyze_source(
        &self,
        source: &dyn SeriesSource,
        symbol: &str,
        days: usize,
    ) -> StockResult<AnalysisReport> {
        let series = source.load(symbol, days)?;
        info!(symbol, days, source = source.name(), "analyzing series");
        Ok(self.report(&series)?)
    }
}

/// Analyze with the default thresholds.
pub fn analyze(series: &BarSeries) -> Result<AnalysisResult, AnalysisError> {
    StockAnalyzer::default().analyze(series)
}
