//! Moving averages over price and volume.
//!
//! This crate provides:
//! - The sliding-window `Sma` indicator
//! - Aligned moving-average sequences with `None` placeholders
//! - Scalar trailing means used by the market classifier
//! - Chart overlay sets for price (5/10/20/60/250) and volume (5/10)

pub mod moving_average;
pub mod overlay;

pub use moving_average::{mean_of_last_n, sma, sma_display, Sma};
pub use overlay::{price_overlays, volume_overlays, Overlay, PRICE_WINDOWS, VOLUME_WINDOWS};
