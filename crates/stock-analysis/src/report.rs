//! Analysis report generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::character::MarketCharacter;
use crate::narrative::AnalysisResult;
use crate::readings::Classification;

/// Complete analysis of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Symbol analyzed
    pub symbol: String,
    /// Date of the newest bar
    pub as_of: NaiveDate,
    /// Close of the newest bar
    pub last_close: f64,
    /// Number of bars analyzed
    pub bars: usize,
    /// Narrative panels
    pub analysis: AnalysisResult,
    /// Structured readings behind the narrative
    pub classification: Classification,
    /// Bull/bear test; `None` below 61 bars
    pub character: Option<MarketCharacter>,
    /// 250-session average of closes; `None` below 250 bars
    pub long_term_average: Option<f64>,
}

impl AnalysisReport {
    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("                     ANALYSIS REPORT                        \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str(&format!("  Symbol:              {}\n", self.symbol));
        s.push_str(&format!("  As of:               {}\n", self.as_of));
        s.push_str(&format!("  Last Close:          {:.2}\n", self.last_close));
        s.push_str(&format!("  Bars:                {}\n", self.bars));
        match self.long_term_average {
            Some(ma) => s.push_str(&format!("  MA250:               {:.2}\n", ma)),
            None => s.push_str("  MA250:               n/a (needs 250 bars)\n"),
        }
        s.push('\n');

        for panel in [
            &self.analysis.technical_analysis,
            &self.analysis.trend_analysis,
            &self.analysis.volume_analysis,
            &self.analysis.final_advice,
        ] {
            s.push_str("───────────────────────────────────────────────────────────\n");
            s.push_str(panel);
            s.push('\n');
        }

        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str("MARKET CHARACTER\n");
        match &self.character {
            Some(c) => {
                let verdict = if c.is_bullish {
                    "bull market"
                } else if c.is_bearish {
                    "bear market"
                } else {
                    "unclear"
                };
                s.push_str(&format!("  Verdict:             {}\n", verdict));
                s.push_str(&format!("  MA Alignment:        {}\n", c.details.ma_alignment));
                s.push_str(&format!("  Price Position:      {}\n", c.details.price_position));
                s.push_str(&format!("  Volume:              {}\n", c.details.volume_status));
                s.push_str(&format!("  Trend Strength:      {}\n", c.details.trend_strength));
            }
            None => s.push_str("  n/a (needs 61 bars)\n"),
        }

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
