//! Rule-based market classifier.
//!
//! Reads a daily series and produces three independent judgments (moving
//! average posture, trend, volume) plus a composite advice. The classifier
//! holds only its thresholds, so the same series always classifies the same
//! way.

use stock_core::error::AnalysisError;
use stock_core::types::{round_to_cents, BarSeries};
use stock_indicators::mean_of_last_n;
use tracing::{debug, trace};

use crate::config::ClassifierConfig;
use crate::readings::{
    Advice, AdviceReading, Classification, MaAlignment, PricePosition, PriceVolume, Signals,
    TechnicalReading, TrendDirection, TrendReading, VolumeChange, VolumeReading,
};

/// Bars needed for the full classification (longest average is MA60).
pub const MIN_ANALYSIS_BARS: usize = 60;

/// Sessions covered by the trend reading.
pub const TREND_LOOKBACK: usize = 20;

/// Sessions in each of the two volume windows.
pub const VOLUME_WINDOW: usize = 5;

/// Percentage change from `from` to `to`; zero when `from` is zero.
pub(crate) fn pct_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        0.0
    } else {
        (to - from) / from * 100.0
    }
}

pub(crate) fn require(series: &BarSeries, required: usize) -> Result<(), AnalysisError> {
    if series.len() < required {
        return Err(AnalysisError::InsufficientData {
            required,
            available: series.len(),
        });
    }
    Ok(())
}

/// Means of the last five volumes and of the five before them.
pub(crate) fn volume_windows(volumes: &[f64]) -> Result<(f64, f64), AnalysisError> {
    let recent = mean_of_last_n(VOLUME_WINDOW, volumes)?;
    let cutoff = volumes.len().saturating_sub(VOLUME_WINDOW);
    let previous = mean_of_last_n(VOLUME_WINDOW, &volumes[..cutoff])?;
    Ok((recent, previous))
}

/// Market classifier.
#[derive(Debug, Clone, Default)]
pub struct MarketClassifier {
    config: ClassifierConfig,
}

impl MarketClassifier {
    /// Create a classifier with validated thresholds.
    pub fn new(config: ClassifierConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the thresholds.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Moving-average posture from the trailing 5/10/20/60 closes.
    pub fn technical(&self, series: &BarSeries) -> Result<TechnicalReading, AnalysisError> {
        require(series, MIN_ANALYSIS_BARS)?;

        let closes = series.closes();
        let ma5 = mean_of_last_n(5, &closes)?;
        let ma10 = mean_of_last_n(10, &closes)?;
        let ma20 = mean_of_last_n(20, &closes)?;
        let ma60 = mean_of_last_n(60, &closes)?;
        let last_close = closes[closes.len() - 1];

        let reading = TechnicalReading {
            ma5,
            ma10,
            ma20,
            ma60,
            last_close,
            alignment: MaAlignment::from_averages(ma5, ma10, ma20, ma60),
            short_term: PricePosition::of(last_close, ma5),
        };
        trace!(?reading, "technical reading");
        Ok(reading)
    }

    /// Direction and size of the move across the trailing 20 highs, with
    /// support and resistance from the same window.
    pub fn trend(&self, series: &BarSeries) -> Result<TrendReading, AnalysisError> {
        require(series, TREND_LOOKBACK)?;

        let window = series.last_n(TREND_LOOKBACK);
        let first_high = window[0].high;
        let last_high = window[window.len() - 1].high;
        let change_pct = pct_change(first_high, last_high);

        let threshold = self.config.trend_threshold_pct;
        let direction = if change_pct > threshold {
            TrendDirection::Up
        } else if change_pct < -threshold {
            TrendDirection::Down
        } else {
            TrendDirection::Sideways
        };

        let support = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        let resistance = window.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);

        let reading = TrendReading {
            change_pct,
            direction,
            support: round_to_cents(support),
            resistance: round_to_cents(resistance),
        };
        trace!(?reading, "trend reading");
        Ok(reading)
    }

    /// Recent volume against the previous window, crossed with the
    /// five-session price change.
    pub fn volume(&self, series: &BarSeries) -> Result<VolumeReading, AnalysisError> {
        require(series, 2 * VOLUME_WINDOW)?;

        let (recent_avg, previous_avg) = volume_windows(&series.volumes())?;
        let change = if recent_avg > previous_avg * self.config.volume_expand_ratio {
            VolumeChange::Expanding
        } else if recent_avg < previous_avg * self.config.volume_contract_ratio {
            VolumeChange::Contracting
        } else {
            VolumeChange::Stable
        };

        let closes = series.closes();
        let n = closes.len();
        let price_change_pct = pct_change(closes[n - 6], closes[n - 1]);

        let relation = if price_change_pct > 0.0 && recent_avg > previous_avg {
            PriceVolume::RisingWithVolume
        } else if price_change_pct < 0.0 && recent_avg > previous_avg {
            PriceVolume::SellingPressure
        } else if price_change_pct > 0.0 && recent_avg < previous_avg {
            PriceVolume::RallyWithoutVolume
        } else {
            PriceVolume::DeclineFading
        };

        let reading = VolumeReading {
            recent_avg,
            previous_avg,
            change,
            price_change_pct,
            relation,
        };
        trace!(?reading, "volume reading");
        Ok(reading)
    }

    /// Combine the three readings into a recommendation.
    ///
    /// Two bullish votes win; otherwise two bearish votes; otherwise unclear.
    pub fn advise(
        &self,
        technical: &TechnicalReading,
        trend: &TrendReading,
        volume: &VolumeReading,
    ) -> AdviceReading {
        let signals = Signals {
            ma_bullish: technical.alignment == MaAlignment::Bullish,
            trend_up: trend.direction == TrendDirection::Up,
            volume_expanding: volume.change == VolumeChange::Expanding,
            ma_bearish: technical.alignment == MaAlignment::Bearish,
            trend_down: trend.direction == TrendDirection::Down,
            selling_pressure: volume.relation == PriceVolume::SellingPressure,
        };

        let advice = if signals.bullish_count() >= 2 {
            Advice::Bullish
        } else if signals.bearish_count() >= 2 {
            Advice::Bearish
        } else {
            Advice::Unclear
        };

        AdviceReading { signals, advice }
    }

    /// Run every reading over the series.
    pub fn classify(&self, series: &BarSeries) -> Result<Classification, AnalysisError> {
        require(series, MIN_ANALYSIS_BARS)?;

        let technical = self.technical(series)?;
        let trend = self.trend(series)?;
        let volume = self.volume(series)?;
        let advice = self.advise(&technical, &trend, &volume);

        debug!(
            symbol = %series.symbol,
            bars = series.len(),
            alignment = ?technical.alignment,
            trend = ?trend.direction,
            volume = ?volume.change,
            bullish = advice.signals.bullish_count(),
            bearish = advice.signals.bearish_count(),
            advice = ?advice.advice,
            "classified series"
        );

        Ok(Classification {
            technical,
            trend,
            volume,
            advice,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{flat, series_from, slow_rise};

    fn rising_70() -> BarSeries {
        let closes: Vec<f64> = (0..70).map(|i| 100.0 + i as f64).collect();
        let volumes: Vec<u64> = (0..70).map(|i| 1000 + 100 * i).collect();
        series_from(&closes, &volumes)
    }

    #[test]
    fn test_rising_series_technical() {
        let reading = MarketClassifier::default().technical(&rising_70()).unwrap();

        assert_eq!(reading.alignment, MaAlignment::Bullish);
        assert_eq!(reading.short_term, PricePosition::Above);
        assert!((reading.ma5 - 167.0).abs() < 1e-10);
        assert!((reading.ma60 - 139.5).abs() < 1e-10);
    }

    #[test]
    fn test_rising_series_trend() {
        let reading = MarketClassifier::default().trend(&rising_70()).unwrap();

        // highs run from 151 to 170 over the last 20 bars
        assert_eq!(reading.direction, TrendDirection::Up);
        assert!((reading.change_pct - (19.0 / 151.0 * 100.0)).abs() < 1e-10);
        assert_eq!(reading.support, 149.0);
        assert_eq!(reading.resistance, 170.0);
    }

    #[test]
    fn test_rising_series_volume() {
        let reading = MarketClassifier::default().volume(&rising_70()).unwrap();

        assert!((reading.recent_avg - 7700.0).abs() < 1e-10);
        assert!((reading.previous_avg - 7200.0).abs() < 1e-10);
        assert_eq!(reading.change, VolumeChange::Stable);
        assert_eq!(reading.relation, PriceVolume::RisingWithVolume);
    }

    #[test]
    fn test_flat_series() {
        let classification = MarketClassifier::default().classify(&flat(70)).unwrap();

        assert_eq!(classification.technical.alignment, MaAlignment::Crossed);
        assert_eq!(classification.technical.short_term, PricePosition::Below);
        assert_eq!(classification.trend.direction, TrendDirection::Sideways);
        assert_eq!(classification.trend.change_pct, 0.0);
        assert_eq!(classification.volume.change, VolumeChange::Stable);
        assert_eq!(classification.volume.relation, PriceVolume::DeclineFading);
        assert_eq!(classification.advice.advice, Advice::Unclear);
    }

    #[test]
    fn test_two_of_three_bullish_signals() {
        // MA alignment and trend, volume stable
        let classification = MarketClassifier::default().classify(&rising_70()).unwrap();
        assert_eq!(classification.advice.signals.bullish_count(), 2);
        assert!(!classification.advice.signals.volume_expanding);
        assert_eq!(classification.advice.advice, Advice::Bullish);

        // MA alignment and volume, trend sideways
        let mut volumes = vec![1000; 70];
        volumes[65..].fill(2000);
        let classification = MarketClassifier::default()
            .classify(&slow_rise(70, &volumes))
            .unwrap();
        assert_eq!(classification.trend.direction, TrendDirection::Sideways);
        assert_eq!(classification.volume.change, VolumeChange::Expanding);
        assert_eq!(classification.advice.signals.bullish_count(), 2);
        assert_eq!(classification.advice.advice, Advice::Bullish);
    }

    #[test]
    fn test_one_bullish_signal_is_unclear() {
        let classification = MarketClassifier::default()
            .classify(&slow_rise(70, &[1000; 70]))
            .unwrap();

        assert_eq!(classification.technical.alignment, MaAlignment::Bullish);
        assert_eq!(classification.advice.signals.bullish_count(), 1);
        assert_eq!(classification.advice.advice, Advice::Unclear);
    }

    #[test]
    fn test_zero_bullish_signals_is_unclear() {
        let classification = MarketClassifier::default().classify(&flat(60)).unwrap();
        assert_eq!(classification.advice.signals.bullish_count(), 0);
        assert_eq!(classification.advice.advice, Advice::Unclear);
    }

    #[test]
    fn test_falling_series_is_bearish() {
        let closes: Vec<f64> = (0..70).map(|i| 200.0 - i as f64).collect();
        let volumes: Vec<u64> = (0..70).map(|i| 1000 + 100 * i).collect();
        let classification = MarketClassifier::default()
            .classify(&series_from(&closes, &volumes))
            .unwrap();

        assert_eq!(classification.technical.alignment, MaAlignment::Bearish);
        assert_eq!(classification.trend.direction, TrendDirection::Down);
        assert_eq!(classification.volume.relation, PriceVolume::SellingPressure);
        assert_eq!(classification.advice.signals.bearish_count(), 3);
        assert_eq!(classification.advice.advice, Advice::Bearish);
    }

    #[test]
    fn test_contracting_volume_rally() {
        let mut volumes = vec![2000; 70];
        volumes[65..].fill(1000);
        let reading = MarketClassifier::default()
            .volume(&slow_rise(70, &volumes))
            .unwrap();

        assert_eq!(reading.change, VolumeChange::Contracting);
        assert_eq!(reading.relation, PriceVolume::RallyWithoutVolume);
    }

    #[test]
    fn test_custom_trend_threshold() {
        let config = ClassifierConfig {
            trend_threshold_pct: 15.0,
            ..Default::default()
        };
        let reading = MarketClassifier::new(config).unwrap().trend(&rising_70()).unwrap();

        // 12.58% no longer counts as a trend
        assert_eq!(reading.direction, TrendDirection::Sideways);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = MarketClassifier::default();
        let series = rising_70();

        assert_eq!(
            classifier.classify(&series).unwrap(),
            classifier.classify(&series).unwrap()
        );
    }

    #[test]
    fn test_insufficient_data() {
        let err = MarketClassifier::default().classify(&flat(59)).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InsufficientData {
                required: 60,
                available: 59
            }
        );

        // Trend and volume need less history than the averages
        assert!(MarketClassifier::default().trend(&flat(20)).is_ok());
        assert!(MarketClassifier::default().volume(&flat(10)).is_ok());
        assert!(MarketClassifier::default().volume(&flat(9)).is_err());
    }

    #[test]
    fn test_pct_change_zero_base() {
        assert_eq!(pct_change(0.0, 10.0), 0.0);
        assert!((pct_change(100.0, 110.0) - 10.0).abs() < 1e-10);
    }
}
