//! Core traits for the stock analyzer.

mod indicator;
mod series_source;

pub use indicator::Indicator;
pub use series_source::SeriesSource;
