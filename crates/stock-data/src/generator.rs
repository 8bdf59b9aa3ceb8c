//! Synthetic daily series generator.
//!
//! Produces a trending random walk: the price drifts in one direction for a
//! fixed number of sessions, then the direction is re-rolled. Prices are
//! rounded to cents and every bar satisfies `low <= open, close <= high`.

use chrono::{Days, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use stock_core::error::DataError;
use stock_core::traits::SeriesSource;
use stock_core::types::{round_to_cents, Bar, BarSeries};
use tracing::{debug, trace};

/// Default number of sessions, one trading year.
pub const DEFAULT_DAYS: usize = 250;

/// Lowest price the walk is allowed to reach.
const PRICE_FLOOR: f64 = 0.01;

/// Random-walk parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Lower bound of the starting price (inclusive)
    pub start_price_min: f64,
    /// Upper bound of the starting price (exclusive)
    pub start_price_max: f64,
    /// Sessions between trend re-rolls
    pub trend_period: usize,
    /// Largest fractional move per session
    pub max_daily_move: f64,
    /// Largest fractional distance of high/low from the close
    pub max_wick: f64,
    /// Full width of the open's jitter around the close
    pub open_jitter: f64,
    /// Upper bound of the base volume draw
    pub max_volume: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_price_min: 100.0,
            start_price_max: 150.0,
            trend_period: 50,
            max_daily_move: 0.03,
            max_wick: 0.02,
            open_jitter: 0.02,
            max_volume: 1_000_000.0,
        }
    }
}

impl GeneratorConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), DataError> {
        if !(self.start_price_min > 0.0 && self.start_price_min < self.start_price_max) {
            return Err(DataError::InvalidConfig(format!(
                "start price range [{}, {}) must be positive and non-empty",
                self.start_price_min, self.start_price_max
            )));
        }
        if self.trend_period == 0 {
            return Err(DataError::InvalidConfig(
                "trend period must be greater than 0".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.max_daily_move) {
            return Err(DataError::InvalidConfig(
                "max daily move must be in [0, 1)".into(),
            ));
        }
        if !(0.0..1.0).contains(&self.max_wick) {
            return Err(DataError::InvalidConfig("max wick must be in [0, 1)".into()));
        }
        if !(0.0..1.0).contains(&self.open_jitter) {
            return Err(DataError::InvalidConfig(
                "open jitter must be in [0, 1)".into(),
            ));
        }
        if self.max_volume < 0.0 {
            return Err(DataError::InvalidConfig(
                "max volume must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Direction of the walk, +1 or -1.
#[derive(Debug, Clone, Copy)]
struct TrendState {
    sign: f64,
}

impl TrendState {
    fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Self { sign }
    }
}

/// Synthetic daily series generator.
#[derive(Debug, Clone, Default)]
pub struct SeriesGenerator {
    config: GeneratorConfig,
    seed: Option<u64>,
    end_date: Option<NaiveDate>,
}

impl SeriesGenerator {
    /// Create a generator with validated parameters.
    pub fn new(config: GeneratorConfig) -> Result<Self, DataError> {
        config.validate()?;
        Ok(Self {
            config,
            seed: None,
            end_date: None,
        })
    }

    /// Use a fixed seed so every call yields the same walk.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Date the series as if generated on `date` instead of today.
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Get the generator configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate `days` bars for `symbol`.
    ///
    /// Uses the configured seed if any, otherwise the thread-local RNG.
    pub fn generate(&self, symbol: &str, days: usize) -> Result<BarSeries, DataError> {
        let end_date = self.end_date.unwrap_or_else(|| Local::now().date_naive());
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.generate_with(&mut rng, symbol, days, end_date)
            }
            None => self.generate_with(&mut rand::rng(), symbol, days, end_date),
        }
    }

    /// Generate `days` bars for `symbol` from an explicit random source.
    ///
    /// Bar `i` is dated `end_date - (days - i)`, so the newest bar falls on
    /// the day before `end_date`.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        symbol: &str,
        days: usize,
        end_date: NaiveDate,
    ) -> Result<BarSeries, DataError> {
        if days < 1 {
            return Err(DataError::InvalidArgument(
                "days must be at least 1".into(),
            ));
        }
        let first_date = end_date
            .checked_sub_days(Days::new(days as u64))
            .ok_or_else(|| {
                DataError::InvalidArgument(format!(
                    "{} days before {} is outside the calendar",
                    days, end_date
                ))
            })?;

        let cfg = &self.config;
        let start_price = rng.random_range(cfg.start_price_min..cfg.start_price_max);
        let mut price = start_price;
        let mut trend = TrendState::roll(rng);
        let mut bars = Vec::with_capacity(days);

        for (i, date) in first_date.iter_days().take(days).enumerate() {
            if i % cfg.trend_period == 0 {
                trend = TrendState::roll(rng);
                trace!(index = i, sign = trend.sign, "trend re-rolled");
            }

            price *= 1.0 + trend.sign * rng.random::<f64>() * cfg.max_daily_move;
            price = price.max(PRICE_FLOOR);

            let base_volume = (rng.random::<f64>() * cfg.max_volume).floor();
            let volume = (base_volume * (1.0 + trend.sign * rng.random::<f64>()))
                .floor()
                .max(0.0) as u64;

            let close = round_to_cents(price);
            let high = round_to_cents(price * (1.0 + rng.random::<f64>() * cfg.max_wick));
            let low = round_to_cents(price * (1.0 - rng.random::<f64>() * cfg.max_wick));
            let jitter = (rng.random::<f64>() - 0.5) * cfg.open_jitter;
            let open = round_to_cents(price * (1.0 + jitter));

            // Independent draws can leave open outside the wicks.
            let high = high.max(open).max(close);
            let low = low.min(open).min(close);

            bars.push(Bar::new(date, open, high, low, close, volume));
        }

        debug!(
            symbol,
            days,
            start_price = round_to_cents(start_price),
            last_close = round_to_cents(price),
            "generated synthetic series"
        );

        BarSeries::from_bars(symbol, bars)
    }
}

impl SeriesSource for SeriesGenerator {
    fn load(&self, symbol: &str, days: usize) -> Result<BarSeries, DataError> {
        self.generate(symbol, days)
    }

    fn name(&self) -> &str {
        "synthetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn seeded(seed: u64, days: usize) -> BarSeries {
        let mut rng = StdRng::seed_from_u64(seed);
        SeriesGenerator::default()
            .generate_with(&mut rng, "AAPL", days, end_date())
            .unwrap()
    }

    #[test]
    fn test_default_length_and_symbol() {
        let series = seeded(7, DEFAULT_DAYS);
        assert_eq!(series.len(), 250);
        assert_eq!(series.symbol, "AAPL");
    }

    #[test]
    fn test_dates_advance_one_day_per_bar() {
        let series = seeded(11, 120);
        let dates: Vec<NaiveDate> = series.bars().iter().map(|b| b.date).collect();

        for pair in dates.windows(2) {
            assert_eq!(pair[1], pair[0] + Days::new(1));
        }
        assert_eq!(*dates.last().unwrap(), end_date() - Days::new(1));
        assert_eq!(dates[0], end_date() - Days::new(120));
    }

    #[test]
    fn test_ohlc_invariant_holds() {
        // The raw draws can put open above high or below low; the generator
        // clamps the wicks so every bar stays consistent.
        for seed in 0..20 {
            let series = seeded(seed, 250);
            for bar in series.bars().iter() {
                assert!(bar.low <= bar.open && bar.open <= bar.high, "{:?}", bar);
                assert!(bar.low <= bar.close && bar.close <= bar.high, "{:?}", bar);
                assert!(bar.low > 0.0);
            }
        }
    }

    #[test]
    fn test_prices_are_rounded_to_cents() {
        let series = seeded(3, 60);
        for bar in series.bars().iter() {
            for price in [bar.open, bar.high, bar.low, bar.close] {
                assert!(((price * 100.0).round() - price * 100.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_volume_bounds() {
        let series = seeded(5, 250);
        // base < max_volume and the trend multiplier is below 2
        assert!(series.bars().iter().all(|b| (b.volume as f64) < 2_000_000.0));
    }

    #[test]
    fn test_first_close_within_one_move_of_start_range() {
        let series = seeded(9, 1);
        let close = series.last().unwrap().close;
        assert!(close >= 97.0 && close <= 154.5, "close {}", close);
    }

    #[test]
    fn test_direction_constant_within_trend_period() {
        let series = seeded(21, 250);
        let closes = series.closes();

        for segment in closes.chunks(50) {
            let up = segment.windows(2).all(|w| w[1] >= w[0]);
            let down = segment.windows(2).all(|w| w[1] <= w[0]);
            assert!(up || down, "segment changed direction: {:?}", segment);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = SeriesGenerator::default()
            .with_seed(42)
            .with_end_date(end_date());

        let a = generator.generate("MSFT", 100).unwrap();
        let b = generator.generate("MSFT", 100).unwrap();
        assert_eq!(a, b);

        let c = generator.clone().with_seed(43).generate("MSFT", 100).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_days_rejected() {
        let err = SeriesGenerator::default().generate("AAPL", 0).unwrap_err();
        assert!(matches!(err, DataError::InvalidArgument(_)));
    }

    #[test]
    fn test_days_beyond_calendar_rejected() {
        let generator = SeriesGenerator::default().with_seed(1);

        for days in [usize::MAX, u32::MAX as usize] {
            let err = generator.generate("AAPL", days).unwrap_err();
            assert!(matches!(err, DataError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_series_source_impl() {
        let generator = SeriesGenerator::default().with_seed(1);
        let series = generator.load("TSLA", 30).unwrap();

        assert_eq!(series.len(), 30);
        assert_eq!(generator.name(), "synthetic");
    }

    #[test]
    fn test_config_validation() {
        assert!(GeneratorConfig::default().validate().is_ok());

        let inverted = GeneratorConfig {
            start_price_min: 150.0,
            start_price_max: 100.0,
            ..Default::default()
        };
        assert!(SeriesGenerator::new(inverted).is_err());

        let no_period = GeneratorConfig {
            trend_period: 0,
            ..Default::default()
        };
        assert!(matches!(
            no_period.validate(),
            Err(DataError::InvalidConfig(_))
        ));
    }
}
