//! Series source trait definitions.

use crate::error::DataError;
use crate::types::BarSeries;

/// Anything that can hand out a daily series for a symbol.
pub trait SeriesSource: Send + Sync {
    /// Load `days` daily bars for `symbol`, ordered from oldest to newest.
    fn load(&self, symbol: &str, days: usize) -> Result<BarSeries, DataError>;

    /// Get the source name.
    fn name(&self) -> &str;
}
