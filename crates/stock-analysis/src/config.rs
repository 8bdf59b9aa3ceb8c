//! Classifier thresholds.

use serde::{Deserialize, Serialize};
use stock_core::error::AnalysisError;

/// Percentage and ratio thresholds used by the market classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// 20-session move (in percent) beyond which a trend is reported
    pub trend_threshold_pct: f64,
    /// Recent/previous volume ratio above which volume is expanding
    pub volume_expand_ratio: f64,
    /// Recent/previous volume ratio below which volume is contracting
    pub volume_contract_ratio: f64,
    /// Stricter expansion ratio for the market character
    pub character_expand_ratio: f64,
    /// Stricter contraction ratio for the market character
    pub character_contract_ratio: f64,
    /// 20-session close change (in percent) a bull or bear market needs
    pub character_change_pct: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            trend_threshold_pct: 5.0,
            volume_expand_ratio: 1.2,
            volume_contract_ratio: 0.8,
            character_expand_ratio: 1.3,
            character_contract_ratio: 0.7,
            character_change_pct: 8.0,
        }
    }
}

impl ClassifierConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.trend_threshold_pct < 0.0 || self.character_change_pct < 0.0 {
            return Err(AnalysisError::InvalidConfig(
                "percentage thresholds must not be negative".into(),
            ));
        }
        let (contract, expand) = (self.volume_contract_ratio, self.volume_expand_ratio);
        if !(0.0 < contract && contract <= expand) {
            return Err(AnalysisError::InvalidConfig(format!(
                "volume ratios must satisfy 0 < contract ({}) <= expand ({})",
                self.volume_contract_ratio, self.volume_expand_ratio
            )));
        }
        if !(0.0 < self.character_contract_ratio
            && self.character_contract_ratio <= self.character_expand_ratio)
        {
            return Err(AnalysisError::InvalidConfig(format!(
                "character volume ratios must satisfy 0 < contract ({}) <= expand ({})",
                self.character_contract_ratio, self.character_expand_ratio
            )));
        }
        Ok(())
    }
}
