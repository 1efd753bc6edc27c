//! Display formatting for computed compensation.
//!
//! Everything here reads computed values and produces strings; nothing feeds
//! back into the calculation.

mod formatting;
mod salary_table;

pub use formatting::{PLACEHOLDER, format_amount, format_indian_grouping};
pub use salary_table::{RowKind, SalaryRow, SalaryTable};
