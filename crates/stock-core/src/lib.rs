//! Core types and traits for the stock analyzer.
//!
//! This crate provides the foundational building blocks including:
//! - Daily market data types (Bar, BarSeries)
//! - Price rounding helpers shared by the generator and the indicators
//! - Error types for every layer
//! - The batch `Indicator` trait and the `SeriesSource` trait

pub mod types;
pub mod traits;
pub mod error;

pub use error::{ErrorKind, StockError, StockResult};
pub use types::*;
pub use traits::*;
