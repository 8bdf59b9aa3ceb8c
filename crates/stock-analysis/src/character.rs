//! Stricter bull/bear market test.

use serde::{Deserialize, Serialize};
use stock_core::error::AnalysisError;
use stock_core::types::BarSeries;
use stock_indicators::mean_of_last_n;
use tracing::debug;

use crate::classifier::{pct_change, require, volume_windows, MarketClassifier};
use crate::readings::{MaAlignment, PricePosition, VolumeChange};

/// Bars needed by the market character (the close 20 sessions back plus MA60).
pub const MIN_CHARACTER_BARS: usize = 61;

/// Sessions covered by the close-to-close change.
pub const CHARACTER_LOOKBACK: usize = 20;

/// Human-readable breakdown of a [`MarketCharacter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDetails {
    pub ma_alignment: String,
    pub price_position: String,
    pub volume_status: String,
    /// e.g. `12.34% up`
    pub trend_strength: String,
}

/// Whether the market qualifies as a bull or bear market.
///
/// Exactly one of the three flags is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCharacter {
    pub is_bullish: bool,
    pub is_bearish: bool,
    pub is_unclear: bool,
    pub details: CharacterDetails,
}

impl MarketClassifier {
    /// A bull market needs bullish alignment, a close above MA20, heavy
    /// volume and a strong 20-session gain; a bear market mirrors it with a
    /// loss. Heavy volume is required in both directions.
    pub fn market_character(&self, series: &BarSeries) -> Result<MarketCharacter, AnalysisError> {
        require(series, MIN_CHARACTER_BARS)?;

        let config = self.config();
        let closes = series.closes();
        let n = closes.len();
        let last = closes[n - 1];

        let ma5 = mean_of_last_n(5, &closes)?;
        let ma10 = mean_of_last_n(10, &closes)?;
        let ma20 = mean_of_last_n(20, &closes)?;
        let ma60 = mean_of_last_n(60, &closes)?;
        let alignment = MaAlignment::from_averages(ma5, ma10, ma20, ma60);
        let position = PricePosition::of(last, ma20);

        let (recent, previous) = volume_windows(&series.volumes())?;
        let volume = if recent > previous * config.character_expand_ratio {
            VolumeChange::Expanding
        } else if recent < previous * config.character_contract_ratio {
            VolumeChange::Contracting
        } else {
            VolumeChange::Stable
        };
        let heavy_volume = volume == VolumeChange::Expanding;

        let change = pct_change(closes[n - 1 - CHARACTER_LOOKBACK], last);

        let is_bullish = alignment == MaAlignment::Bullish
            && position == PricePosition::Above
            && heavy_volume
            && change > config.character_change_pct;
        let is_bearish = alignment == MaAlignment::Bearish
            && last < ma20
            && heavy_volume
            && change < -config.character_change_pct;

        debug!(
            symbol = %series.symbol,
            is_bullish,
            is_bearish,
            change_pct = change,
            "market character"
        );

        Ok(MarketCharacter {
            is_bullish,
            is_bearish,
            is_unclear: !is_bullish && !is_bearish,
            details: CharacterDetails {
                ma_alignment: alignment.label().to_string(),
                price_position: match position {
                    PricePosition::Above => "price above MA20".to_string(),
                    PricePosition::Below => "price below MA20".to_string(),
                },
                volume_status: volume.label().to_string(),
                trend_strength: format!(
                    "{:.2}% {}",
                    change.abs(),
                    if change > 0.0 { "up" } else { "down" }
                ),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{flat, series_from};

    fn spiked_volume(len: usize) -> Vec<u64> {
        let mut volumes = vec![1000; len];
        volumes[len - 5..].fill(5000);
        volumes
    }

    #[test]
    fn test_bull_market() {
        let closes: Vec<f64> = (0..70).map(|i| 100.0 + 2.0 * i as f64).collect();
        let character = MarketClassifier::default()
            .market_character(&series_from(&closes, &spiked_volume(70)))
            .unwrap();

        assert!(character.is_bullish);
        assert!(!character.is_bearish);
        assert!(!character.is_unclear);
        assert_eq!(character.details.ma_alignment, "bullish alignment");
        assert_eq!(character.details.price_position, "price above MA20");
        assert_eq!(character.details.volume_status, "volume expanding");
        // 198 -> 238
        assert_eq!(character.details.trend_strength, "20.20% up");
    }

    #[test]
    fn test_bear_market() {
        let closes: Vec<f64> = (0..70).map(|i| 300.0 - 2.0 * i as f64).collect();
        let character = MarketClassifier::default()
            .market_character(&series_from(&closes, &spiked_volume(70)))
            .unwrap();

        assert!(character.is_bearish);
        assert!(!character.is_bullish);
        assert_eq!(character.details.ma_alignment, "bearish alignment");
        assert_eq!(character.details.price_position, "price below MA20");
        // 202 -> 162
        assert_eq!(character.details.trend_strength, "19.80% down");
    }

    #[test]
    fn test_rally_without_heavy_volume_is_unclear() {
        let closes: Vec<f64> = (0..70).map(|i| 100.0 + 2.0 * i as f64).collect();
        let volumes: Vec<u64> = (0..70).map(|i| 1000 + 100 * i).collect();
        let character = MarketClassifier::default()
            .market_character(&series_from(&closes, &volumes))
            .unwrap();

        assert!(character.is_unclear);
        assert_eq!(character.details.volume_status, "volume stable");
    }

    #[test]
    fn test_flat_market() {
        let character = MarketClassifier::default().market_character(&flat(61)).unwrap();

        assert!(character.is_unclear);
        assert_eq!(character.details.ma_alignment, "crossed averages");
        assert_eq!(character.details.price_position, "price below MA20");
        assert_eq!(character.details.trend_strength, "0.00% down");
    }

    #[test]
    fn test_flags_are_exclusive() {
        for len in [61, 80, 120] {
            let closes: Vec<f64> = (0..len).map(|i| 50.0 + (i as f64 * 0.3).sin() * 5.0).collect();
            let character = MarketClassifier::default()
                .market_character(&series_from(&closes, &spiked_volume(len)))
                .unwrap();
            let set = [character.is_bullish, character.is_bearish, character.is_unclear]
                .iter()
                .filter(|&&f| f)
                .count();
            assert_eq!(set, 1);
        }
    }

    #[test]
    fn test_requires_61_bars() {
        let err = MarketClassifier::default().market_character(&flat(60)).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InsufficientData {
                required: 61,
                available: 60
            }
        );
    }
}
