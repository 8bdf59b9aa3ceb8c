//! Indicator trait definitions.

/// Trait for technical indicators.
///
/// Indicators process price data and produce derived values
/// useful for trading decisions.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically prices)
    ///
    /// # Returns
    /// One value per complete window, so `data.len() - period + 1` values,
    /// or an empty vector when there is not enough data.
    fn calculate(&self, data: &[f64]) -> Vec<Self::Output>;

    /// Get the minimum data points required.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Calculate values aligned with the input.
    ///
    /// The result has the same length as `data`; positions without a full
    /// window of history are `None`.
    fn calculate_aligned(&self, data: &[f64]) -> Vec<Option<Self::Output>> {
        let values = self.calculate(data);
        let lead = data.len().saturating_sub(values.len());

        std::iter::repeat_with(|| None)
            .take(lead)
            .chain(values.into_iter().map(Some))
            .collect()
    }
}
