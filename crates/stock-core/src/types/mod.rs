//! Core data types for the stock analyzer.

mod ohlcv;
mod price;

pub use ohlcv::{Bar, BarSeries};
pub use price::{round_to_cents, to_cents};
