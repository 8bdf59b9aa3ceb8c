//! Narrative text rendered from classifier readings.

use serde::{Deserialize, Serialize};

use crate::classifier::TREND_LOOKBACK;
use crate::readings::{
    AdviceReading, Classification, PricePosition, TechnicalReading, TrendDirection, TrendReading,
    VolumeReading,
};

/// The four text panels shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub technical_analysis: String,
    pub trend_analysis: String,
    pub volume_analysis: String,
    pub final_advice: String,
}

impl From<&Classification> for AnalysisResult {
    fn from(c: &Classification) -> Self {
        Self {
            technical_analysis: technical_text(&c.technical),
            trend_analysis: trend_text(&c.trend),
            volume_analysis: volume_text(&c.volume),
            final_advice: advice_text(&c.advice),
        }
    }
}

/// Moving-average alignment and the close against MA5.
pub fn technical_text(r: &TechnicalReading) -> String {
    let position = match r.short_term {
        PricePosition::Above => "price above the 5-day average, short-term strengthening",
        PricePosition::Below => "price at or below the 5-day average, short-term weakening",
    };

    format!(
        "Technical analysis:\n\n\
         1. Moving averages:\n- {}\n\n\
         2. Price position:\n- {}\n",
        r.alignment.description(),
        position
    )
}

/// Trailing 20-session trend with support and resistance.
pub fn trend_text(r: &TrendReading) -> String {
    let trend = match r.direction {
        TrendDirection::Up => format!(
            "uptrend, {}-day gain {:.2}%",
            TREND_LOOKBACK, r.change_pct
        ),
        TrendDirection::Down => format!(
            "downtrend, {}-day decline {:.2}%",
            TREND_LOOKBACK,
            r.change_pct.abs()
        ),
        TrendDirection::Sideways => "consolidation, low volatility".to_string(),
    };

    format!(
        "Trend analysis:\n\n\
         1. Trend:\n- {}\n\n\
         2. Support and resistance:\n- recent support: {:.2}\n- recent resistance: {:.2}\n",
        trend, r.support, r.resistance
    )
}

/// Volume change and how price moved with it.
pub fn volume_text(r: &VolumeReading) -> String {
    format!(
        "Volume analysis:\n\n\
         1. Volume change:\n- {}\n\n\
         2. Price and volume:\n- {}\n",
        r.change.description(),
        r.relation.description()
    )
}

/// Composite advice, broken out and then as one sentence.
pub fn advice_text(r: &AdviceReading) -> String {
    let [character, action, risk] = r.advice.lines();
    format!(
        "Overall advice:\n\n\
         1. Market character: {}\n\
         2. Action: {}\n\
         3. Risk control: {}\n\n\
         In short: {}\n",
        character,
        action,
        risk,
        r.advice.sentence()
    )
}
