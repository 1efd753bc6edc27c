//! Calculation logic for the offer engine.
//!
//! This module turns raw compensation strings from the offer form into the
//! figures shown in the salary structure: amount parsing, per-component
//! annualisation, bonus totals, the headline CTC with its override rule, and
//! the reverse split of an annual CTC into monthly components.

mod allocation;
mod amount;
mod bonus;
mod breakdown;
mod grand_total;
mod line_totals;
mod rounding;

pub use allocation::{MonthlySplit, allocate_annual_ctc, allocate_annual_to_monthly};
pub use amount::{MAX_AMOUNT, ParsedAmount, parse_amount, parse_amount_strict};
pub use bonus::{bonus_lines, compute_bonus_total, is_countable_bonus};
pub use breakdown::compute_breakdown;
pub use grand_total::{GrandTotal, compute_grand_total, effective_override};
pub use line_totals::{LineTotals, MONTHS_PER_YEAR, annualize, compute_line_totals};
pub use rounding::round_half_up;
