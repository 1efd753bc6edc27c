//! The headline "Total CTC(RO)" figure.
//!
//! An entered annual CTC is authoritative and shown exactly as typed, even
//! when the monthly components annualise to something else. Without one the
//! total is the rounded annual value of the fixed components alone; bonuses
//! only feed the informational "Total CTC(I+II)" line. The two lines can
//! disagree when bonuses are present, and that is intended.

use rust_decimal::Decimal;

use crate::models::TotalSource;

use super::amount::parse_amount;
use super::rounding::round_half_up;

/// The combined and final annual totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrandTotal {
    /// Fixed annual total plus the bonus total, "Total CTC(I+II)".
    pub combined_annual_total: Decimal,
    /// The headline figure, "Total CTC(RO)".
    pub final_annual_total: Decimal,
    /// Whether the final figure came from the override.
    pub source: TotalSource,
}

/// Returns the override amount if it is present and positive.
pub fn effective_override(annual_override: Option<&str>) -> Option<Decimal> {
    annual_override
        .map(parse_amount)
        .filter(|amount| *amount > Decimal::ZERO)
}

/// Computes the combined and final annual totals.
///
/// # Examples
///
/// ```
/// use offer_engine::calculation::compute_grand_total;
/// use offer_engine::models::TotalSource;
/// use rust_decimal::Decimal;
///
/// let total = compute_grand_total(Decimal::from(649992), Decimal::ZERO, Some("700000"));
/// assert_eq!(total.final_annual_total, Decimal::from(700000));
/// assert_eq!(total.source, TotalSource::Override);
/// ```
pub fn compute_grand_total(
    fixed_annual_total: Decimal,
    bonus_annual_total: Decimal,
    annual_override: Option<&str>,
) -> GrandTotal {
    let combined_annual_total = fixed_annual_total.saturating_add(bonus_annual_total);

    match effective_override(annual_override) {
        Some(amount) => GrandTotal {
            combined_annual_total,
            final_annual_total: amount,
            source: TotalSource::Override,
        },
        None => GrandTotal {
            combined_annual_total,
            final_annual_total: round_half_up(fixed_annual_total),
            source: TotalSource::FixedComponents,
        },
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
    fn test_override_is_used_verbatim() {
        let total = compute_grand_total(dec("649992"), Decimal::ZERO, Some("700000"));

        assert_eq!(total.final_annual_total, dec("700000"));
        assert_eq!(total.source, TotalSource::Override);
    }

    #[test]
    fn test_fractional_override_is_not_rounded() {
        let total = compute_grand_total(dec("649992"), Decimal::ZERO, Some("650000.75"));
        assert_eq!(total.final_annual_total, dec("650000.75"));
    }

    #[test]
    fn test_no_override_rounds_fixed_annual_total() {
        let total = compute_grand_total(dec("144009.6"), Decimal::ZERO, None);

        assert_eq!(total.final_annual_total, dec("144010"));
        assert_eq!(total.source, TotalSource::FixedComponents);
    }

    #[test]
    fn test_blank_or_non_positive_override_falls_back() {
        for raw in ["", "   ", "abc", "0", "-5000"] {
            let total = compute_grand_total(dec("649992"), Decimal::ZERO, Some(raw));
            assert_eq!(total.final_annual_total, dec("649992"), "override {:?}", raw);
            assert_eq!(total.source, TotalSource::FixedComponents);
        }
    }

    #[test]
    fn test_bonuses_do_not_feed_default_total() {
        let total = compute_grand_total(dec("649992"), dec("100000"), None);

        assert_eq!(total.combined_annual_total, dec("749992"));
        assert_eq!(total.final_annual_total, dec("649992"));
    }

    #[test]
    fn test_extreme_totals_saturate() {
        let total = compute_grand_total(Decimal::MAX, Decimal::MAX, None);

        assert_eq!(total.combined_annual_total, Decimal::MAX);
        assert_eq!(total.final_annual_total, Decimal::MAX);
    }

    #[test]
    fn test_combined_total_reported_alongside_override() {
        let total = compute_grand_total(dec("649992"), dec("100000"), Some("700000"));

        assert_eq!(total.combined_annual_total, dec("749992"));
        assert_eq!(total.final_annual_total, dec("700000"));
    }
}
