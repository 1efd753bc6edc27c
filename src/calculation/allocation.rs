//! Splitting an annual CTC into monthly components.
//!
//! Used when the form only knows the annual figure. Basic pay and HRA take
//! fixed shares of the monthly CTC, each rounded to a whole unit; the special
//! allowance absorbs the residue so the three parts add up to the rounded
//! monthly CTC. The split is a presentational convenience, not a payroll rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::AllocationConfig;

use super::amount::parse_amount;
use super::line_totals::MONTHS_PER_YEAR;
use super::rounding::round_half_up;

/// Whole-unit monthly components derived from an annual CTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySplit {
    /// Monthly basic pay.
    pub basic_monthly: Decimal,
    /// Monthly house rent allowance.
    pub hra_monthly: Decimal,
    /// Monthly special allowance.
    pub special_monthly: Decimal,
}

impl MonthlySplit {
    /// Sum of the three components.
    pub fn total(&self) -> Decimal {
        self.basic_monthly
            .saturating_add(self.hra_monthly)
            .saturating_add(self.special_monthly)
    }
}

/// Allocates an annual CTC across basic pay, HRA and special allowance.
///
/// Returns `None` for a zero CTC, meaning "no data" rather than "zero pay".
///
/// # Examples
///
/// ```
/// use offer_engine::calculation::allocate_annual_to_monthly;
/// use offer_engine::config::AllocationConfig;
/// use rust_decimal::Decimal;
///
/// let split = allocate_annual_to_monthly(Decimal::from(650000), &AllocationConfig::default())
///     .unwrap();
/// assert_eq!(split.basic_monthly, Decimal::from(24998));
/// assert_eq!(split.hra_monthly, Decimal::from(8055));
/// assert_eq!(split.special_monthly, Decimal::from(21114));
/// assert_eq!(split.total(), Decimal::from(54167));
/// ```
pub fn allocate_annual_to_monthly(
    annual_ctc: Decimal,
    allocation: &AllocationConfig,
) -> Option<MonthlySplit> {
    if annual_ctc.is_zero() {
        return None;
    }

    let monthly_ctc = annual_ctc / Decimal::from(MONTHS_PER_YEAR);
    let basic_monthly = round_half_up(monthly_ctc * allocation.basic_ratio());
    let hra_monthly = round_half_up(monthly_ctc * allocation.hra_ratio());
    let special_monthly = round_half_up(monthly_ctc - basic_monthly - hra_monthly);

    Some(MonthlySplit {
        basic_monthly,
        hra_monthly,
        special_monthly,
    })
}

/// Parses an annual CTC field and allocates it; blank or malformed text yields `None`.
pub fn allocate_annual_ctc(annual_ctc: &str, allocation: &AllocationConfig) -> Option<MonthlySplit> {
    allocate_annual_to_monthly(parse_amount(annual_ctc), allocation)
}
