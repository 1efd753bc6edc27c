//! Full compensation breakdown for one form snapshot.

use tracing::trace;

use crate::models::{CompensationBreakdown, CompensationInput};

use super::amount::parse_amount;
use super::bonus::{bonus_lines, compute_bonus_total};
use super::grand_total::compute_grand_total;
use super::line_totals::compute_line_totals;

/// Derives every figure in the salary structure from raw form input.
///
/// Cheap enough to run on every keystroke: linear in the number of bonus rows
/// and free of shared state.
///
/// # Examples
///
/// ```
/// use offer_engine::calculation::compute_breakdown;
/// use offer_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let input = CompensationInput::from_monthly("30000", "9666", "14500");
/// let breakdown = compute_breakdown(&input);
/// assert_eq!(breakdown.fixed_annual_total, Decimal::from(649992));
/// assert_eq!(breakdown.final_annual_total, Decimal::from(649992));
/// ```
pub fn compute_breakdown(input: &CompensationInput) -> CompensationBreakdown {
    let lines = compute_line_totals(
        parse_amount(&input.basic_pay_monthly),
        parse_amount(&input.house_rent_allowance_monthly),
        parse_amount(&input.special_allowance_monthly),
    );
    let bonus_annual_total = compute_bonus_total(&input.bonuses);
    let grand_total = compute_grand_total(
        lines.fixed_annual_total,
        bonus_annual_total,
        input.annual_total_override.as_deref(),
    );

    trace!(
        fixed_monthly_total = %lines.fixed_monthly_total,
        bonus_annual_total = %bonus_annual_total,
        final_annual_total = %grand_total.final_annual_total,
        "Computed compensation breakdown"
    );

    CompensationBreakdown {
        basic_monthly: lines.basic_monthly,
        basic_annual: lines.basic_annual,
        hra_monthly: lines.hra_monthly,
        hra_annual: lines.hra_annual,
        special_monthly: lines.special_monthly,
        special_annual: lines.special_annual,
        fixed_monthly_total: lines.fixed_monthly_total,
        fixed_annual_total: lines.fixed_annual_total,
        bonus_lines: bonus_lines(&input.bonuses),
        bonus_annual_total,
        combined_annual_total: grand_total.combined_annual_total,
        final_annual_total: grand_total.final_annual_total,
        total_source: grand_total.source,
    }
}
