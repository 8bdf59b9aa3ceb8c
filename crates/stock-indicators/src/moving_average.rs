//! Simple moving averages.

use rust_decimal::Decimal;
use stock_core::error::IndicatorError;
use stock_core::traits::Indicator;
use stock_core::types::to_cents;

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    ///
    /// # Panics
    /// If `period` is 0. Use [`Sma::try_new`] for caller-supplied windows.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Create a new SMA, rejecting a zero period.
    pub fn try_new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidArgument(
                "window must be greater than 0".into(),
            ));
        }
        Ok(Self { period })
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < self.period {
            return vec![];
        }

        let mut result = Vec::with_capacity(data.len() - self.period + 1);
        let period_f64 = self.period as f64;

        // Initial sum
        let mut sum: f64 = data[..self.period].iter().sum();
        result.push(sum / period_f64);

        // Sliding window
        for i in self.period..data.len() {
            sum = sum - data[i - self.period] + data[i];
            result.push(sum / period_f64);
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Moving average aligned with `values`, full precision.
///
/// Index `i` is `None` while `i < window - 1`, otherwise the mean of
/// `values[i + 1 - window..=i]`.
pub fn sma(window: usize, values: &[f64]) -> Result<Vec<Option<f64>>, IndicatorError> {
    Ok(Sma::try_new(window)?.calculate_aligned(values))
}

/// Moving average aligned with `values`, rounded to cents for display.
pub fn sma_display(window: usize, values: &[f64]) -> Result<Vec<Option<Decimal>>, IndicatorError> {
    Ok(sma(window, values)?
        .into_iter()
        .map(|v| v.and_then(to_cents))
        .collect())
}

/// Mean of the trailing `n` values.
pub fn mean_of_last_n(n: usize, values: &[f64]) -> Result<f64, IndicatorError> {
    if n == 0 {
        return Err(IndicatorError::InvalidArgument(
            "n must be greater than 0".into(),
        ));
    }
    if values.len() < n {
        return Err(IndicatorError::InvalidArgument(format!(
            "need {} values for the mean, have {}",
            n,
            values.len()
        )));
    }

    let tail = &values[values.len() - n..];
    Ok(tail.iter().sum::<f64>() / n as f64)
}
