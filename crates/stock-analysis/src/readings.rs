//! Structured classifier output.
//!
//! Every judgment the classifier makes is recorded here as plain data; the
//! narrative text is rendered from these types and never parsed back.

use serde::{Deserialize, Serialize};

/// Ordering of the 5/10/20/60-session averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaAlignment {
    /// MA5 > MA10 > MA20 > MA60
    Bullish,
    /// MA5 < MA10 < MA20 < MA60
    Bearish,
    /// Anything else
    Crossed,
}

impl MaAlignment {
    /// Classify four averages, shortest window first.
    pub fn from_averages(ma5: f64, ma10: f64, ma20: f64, ma60: f64) -> Self {
        if ma5 > ma10 && ma10 > ma20 && ma20 > ma60 {
            MaAlignment::Bullish
        } else if ma5 < ma10 && ma10 < ma20 && ma20 < ma60 {
            MaAlignment::Bearish
        } else {
            MaAlignment::Crossed
        }
    }

    /// Short label.
    pub fn label(&self) -> &'static str {
        match self {
            MaAlignment::Bullish => "bullish alignment",
            MaAlignment::Bearish => "bearish alignment",
            MaAlignment::Crossed => "crossed averages",
        }
    }

    /// Label with its usual reading.
    pub fn description(&self) -> &'static str {
        match self {
            MaAlignment::Bullish => "bullish alignment, strong uptrend",
            MaAlignment::Bearish => "bearish alignment, strong downtrend",
            MaAlignment::Crossed => "crossed averages, trend transition",
        }
    }
}

/// Where the latest close sits relative to a moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePosition {
    Above,
    /// At or below the average
    Below,
}

impl PricePosition {
    pub fn of(price: f64, average: f64) -> Self {
        if price > average {
            PricePosition::Above
        } else {
            PricePosition::Below
        }
    }
}

/// Moving-average posture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalReading {
    pub ma5: f64,
    pub ma10: f64,
    pub ma20: f64,
    pub ma60: f64,
    pub last_close: f64,
    pub alignment: MaAlignment,
    /// Latest close against MA5
    pub short_term: PricePosition,
}

/// Direction of the 20-session move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Sideways,
}

/// Trend direction, magnitude and the range it moved in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReading {
    /// Percentage change between the first and last of the trailing highs
    pub change_pct: f64,
    pub direction: TrendDirection,
    /// Lowest of the trailing lows, in cents
    pub support: f64,
    /// Highest of the trailing highs, in cents
    pub resistance: f64,
}

/// Recent volume against the window before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeChange {
    Expanding,
    Contracting,
    Stable,
}

impl VolumeChange {
    pub fn label(&self) -> &'static str {
        match self {
            VolumeChange::Expanding => "volume expanding",
            VolumeChange::Contracting => "volume contracting",
            VolumeChange::Stable => "volume stable",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VolumeChange::Expanding => "volume expanding, active trading",
            VolumeChange::Contracting => "volume contracting, light trading",
            VolumeChange::Stable => "volume stable",
        }
    }
}

/// How price and volume moved together over the last five sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceVolume {
    /// Price up, volume up
    RisingWithVolume,
    /// Price down, volume up
    SellingPressure,
    /// Price up, volume down
    RallyWithoutVolume,
    /// Everything else, including unchanged price or volume
    DeclineFading,
}

impl PriceVolume {
    pub fn description(&self) -> &'static str {
        match self {
            PriceVolume::RisingWithVolume => "price and volume rising, strong move",
            PriceVolume::SellingPressure => "price down volume up, selling pressure",
            PriceVolume::RallyWithoutVolume => "rally lacks volume support",
            PriceVolume::DeclineFading => "decline losing momentum",
        }
    }
}

/// Volume behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeReading {
    /// Mean of the last five volumes
    pub recent_avg: f64,
    /// Mean of the five volumes before those
    pub previous_avg: f64,
    pub change: VolumeChange,
    /// Five-session close change in percent
    pub price_change_pct: f64,
    pub relation: PriceVolume,
}

/// Independent votes feeding the composite advice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signals {
    pub ma_bullish: bool,
    pub trend_up: bool,
    pub volume_expanding: bool,
    pub ma_bearish: bool,
    pub trend_down: bool,
    pub selling_pressure: bool,
}

impl Signals {
    pub fn bullish_count(&self) -> usize {
        [self.ma_bullish, self.trend_up, self.volume_expanding]
            .into_iter()
            .filter(|&s| s)
            .count()
    }

    pub fn bearish_count(&self) -> usize {
        [self.ma_bearish, self.trend_down, self.selling_pressure]
            .into_iter()
            .filter(|&s| s)
            .count()
    }
}

/// Composite recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    Bullish,
    Bearish,
    Unclear,
}

impl Advice {
    /// Market character, suggested action, risk control.
    pub fn lines(&self) -> [&'static str; 3] {
        match self {
            Advice::Bullish => [
                "bull-market characteristics",
                "consider buying dips",
                "set stop-loss below recent support",
            ],
            Advice::Bearish => [
                "bear-market characteristics",
                "consider reducing or waiting",
                "tighten stop-loss",
            ],
            Advice::Unclear => [
                "characteristics unclear",
                "stay on the sidelines",
                "avoid new positions",
            ],
        }
    }

    /// The advice as one sentence.
    pub fn sentence(&self) -> String {
        format!("{}.", self.lines().join("; "))
    }
}

/// Advice together with the votes behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceReading {
    pub signals: Signals,
    pub advice: Advice,
}

/// Everything the classifier derives from one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub technical: TechnicalReading,
    pub trend: TrendReading,
    pub volume: VolumeReading,
    pub advice: AdviceReading,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_from_averages() {
        assert_eq!(MaAlignment::from_averages(4.0, 3.0, 2.0, 1.0), MaAlignment::Bullish);
        assert_eq!(MaAlignment::from_averages(1.0, 2.0, 3.0, 4.0), MaAlignment::Bearish);
        assert_eq!(MaAlignment::from_averages(4.0, 3.0, 3.0, 1.0), MaAlignment::Crossed);
    }

    #[test]
    fn test_price_position_ties_count_as_below() {
        assert_eq!(PricePosition::of(10.0, 10.0), PricePosition::Below);
        assert_eq!(PricePosition::of(10.01, 10.0), PricePosition::Above);
    }

    #[test]
    fn test_signal_counts() {
        let signals = Signals {
            ma_bullish: true,
            volume_expanding: true,
            trend_down: true,
            ..Default::default()
        };
        assert_eq!(signals.bullish_count(), 2);
        assert_eq!(signals.bearish_count(), 1);
    }

    #[test]
    fn test_advice_sentence() {
        assert_eq!(
            Advice::Bullish.sentence(),
            "bull-market characteristics; consider buying dips; set stop-loss below recent support."
        );
        assert_eq!(
            Advice::Unclear.sentence(),
            "characteristics unclear; stay on the sidelines; avoid new positions."
        );
    }
}
