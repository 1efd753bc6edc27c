//! Whole-rupee rounding.

use rust_decimal::Decimal;

/// Rounds to the nearest whole unit, with halves going towards positive infinity.
///
/// This matches how the browser form rounds, so `-2.5` becomes `-2` rather
/// than `-3`.
///
/// # Examples
///
/// ```
/// use offer_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_half_up(Decimal::from_str("24997.5").unwrap()), Decimal::from(24998));
/// assert_eq!(round_half_up(Decimal::from_str("-2.5").unwrap()), Decimal::from(-2));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    // Values this close to the upper bound carry no fractional digits.
    match value.checked_add(Decimal::new(5, 1)) {
        Some(shifted) => shifted.floor(),
        None => value.floor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_to_nearest() {
        assert_eq!(round_half_up(dec("54166.6667")), dec("54167"));
        assert_eq!(round_half_up(dec("8054.4")), dec("8054"));
        assert_eq!(round_half_up(dec("649992")), dec("649992"));
    }

    #[test]
    fn test_halves_round_up() {
        assert_eq!(round_half_up(dec("0.5")), dec("1"));
        assert_eq!(round_half_up(dec("1.5")), dec("2"));
        assert_eq!(round_half_up(dec("2.5")), dec("3"));
    }

    #[test]
    fn test_upper_bound_does_not_overflow() {
        assert_eq!(round_half_up(Decimal::MAX), Decimal::MAX);
    }

    #[test]
    fn test_negative_halves_round_towards_positive_infinity() {
        assert_eq!(round_half_up(dec("-2.5")), dec("-2"));
        assert_eq!(round_half_up(dec("-2.6")), dec("-3"));
    }
}
