//! Monthly and annual totals for the fixed pay components.
//!
//! Basic pay, house rent allowance and special allowance are entered per
//! month. This module annualises each of them and their sum. No rounding is
//! applied here.

use rust_decimal::Decimal;

/// Number of monthly payments in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Converts a monthly amount to its annual equivalent.
///
/// Saturates at the `Decimal` bounds instead of overflowing.
pub fn annualize(monthly: Decimal) -> Decimal {
    monthly.saturating_mul(Decimal::from(MONTHS_PER_YEAR))
}

/// Monthly and annual figures for the three fixed components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTotals {
    /// Monthly basic pay.
    pub basic_monthly: Decimal,
    /// Annual basic pay.
    pub basic_annual: Decimal,
    /// Monthly house rent allowance.
    pub hra_monthly: Decimal,
    /// Annual house rent allowance.
    pub hra_annual: Decimal,
    /// Monthly special allowance.
    pub special_monthly: Decimal,
    /// Annual special allowance.
    pub special_annual: Decimal,
    /// Sum of the three monthly components.
    pub fixed_monthly_total: Decimal,
    /// The monthly sum times twelve.
    pub fixed_annual_total: Decimal,
}

/// Computes per-component and fixed totals from monthly amounts.
///
/// The fixed annual total is the monthly sum annualised, so it always equals
/// the sum of the three annual figures.
///
/// # Examples
///
/// ```
/// use offer_engine::calculation::compute_line_totals;
/// use rust_decimal::Decimal;
///
/// let totals = compute_line_totals(
///     Decimal::from(30000),
///     Decimal::from(9666),
///     Decimal::from(14500),
/// );
/// assert_eq!(totals.fixed_monthly_total, Decimal::from(54166));
/// assert_eq!(totals.fixed_annual_total, Decimal::from(649992));
/// ```
pub fn compute_line_totals(basic: Decimal, hra: Decimal, special: Decimal) -> LineTotals {
    let fixed_monthly_total = basic.saturating_add(hra).saturating_add(special);

    LineTotals {
        basic_monthly: basic,
        basic_annual: annualize(basic),
        hra_monthly: hra,
        hra_annual: annualize(hra),
        special_monthly: special,
        special_annual: annualize(special),
        fixed_monthly_total,
        fixed_annual_total: annualize(fixed_monthly_total),
    }
}
