//! Price rounding helpers.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Round a price to two decimal places, halves away from zero.
///
/// Values that cannot be represented as a `Decimal` (NaN, infinities) are
/// returned unchanged.
pub fn round_to_cents(value: f64) -> f64 {
    to_cents(value)
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Convert a price to a `Decimal` with exactly two decimal places.
///
/// `12.0` becomes `12.00`, which is how moving averages are displayed.
pub fn to_cents(value: f64) -> Option<Decimal> {
    let mut cents = Decimal::from_f64(value)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    Some(cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(101.23456), 101.23);
        assert_eq!(round_to_cents(99.999), 100.0);
        assert_eq!(round_to_cents(12.0), 12.0);
        assert!(round_to_cents(f64::NAN).is_nan());
    }

    #[test]
    fn test_to_cents_scale() {
        let cents = to_cents(12.0).unwrap();
        assert_eq!(cents, dec!(12.00));
        assert_eq!(cents.to_string(), "12.00");
        assert_eq!(to_cents(13.456).unwrap().to_string(), "13.46");
        assert!(to_cents(f64::INFINITY).is_none());
    }
}
