//! The "SALARY STRUCTURE" annexure table.
//!
//! Turns a [`CompensationBreakdown`] into display rows with every cell already
//! formatted. The breakdown is only read.

use serde::{Deserialize, Serialize};

use crate::models::CompensationBreakdown;

use super::formatting::{PLACEHOLDER, format_amount, format_indian_grouping};

/// The role a row plays in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// One of the three fixed monthly components.
    Component,
    /// "Total Gross Fixed CTC(I)".
    FixedTotal,
    /// A displayed bonus line (annual only).
    Bonus,
    /// "Total CTC(I+II):", present only when bonuses are.
    CombinedTotal,
    /// "Total CTC(RO):", always last.
    GrandTotal,
}

/// One rendered row of the salary structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRow {
    /// Row label in the first column.
    pub label: String,
    /// What the row represents.
    pub kind: RowKind,
    /// "Per Month" cell; empty for annual-only rows.
    pub per_month: String,
    /// "Per Annum" cell.
    pub per_annum: String,
}

impl SalaryRow {
    fn monthly(label: &str, kind: RowKind, monthly: String, annual: String) -> Self {
        Self {
            label: label.to_string(),
            kind,
            per_month: monthly,
            per_annum: annual,
        }
    }

    fn annual_only(label: impl Into<String>, kind: RowKind, annual: String) -> Self {
        Self {
            label: label.into(),
            kind,
            per_month: String::new(),
            per_annum: annual,
        }
    }
}

/// The full salary structure table with its header fields.
///
/// # Example
///
/// ```
/// use offer_engine::calculation::compute_breakdown;
/// use offer_engine::models::CompensationInput;
/// use offer_engine::presentation::SalaryTable;
///
/// let breakdown = compute_breakdown(&CompensationInput::from_monthly("30000", "9666", "14500"));
/// let table = SalaryTable::build("Roshan Saroj", "Digital Consultant", &breakdown);
/// assert_eq!(table.grand_total().unwrap().per_annum, "6,49,992");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTable {
    /// "Name:" header value.
    pub employee_name: String,
    /// "Designation:" header value.
    pub designation: String,
    /// Table rows in display order.
    pub rows: Vec<SalaryRow>,
}

impl SalaryTable {
    /// Builds the table rows from a computed breakdown.
    pub fn build(employee_name: &str, designation: &str, breakdown: &CompensationBreakdown) -> Self {
        let mut rows = vec![
            SalaryRow::monthly(
                "Basic Pay",
                RowKind::Component,
                format_amount(breakdown.basic_monthly),
                format_amount(breakdown.basic_annual),
            ),
            SalaryRow::monthly(
                "House Rent Allowance",
                RowKind::Component,
                format_amount(breakdown.hra_monthly),
                format_amount(breakdown.hra_annual),
            ),
            SalaryRow::monthly(
                "Special Allowance",
                RowKind::Component,
                format_amount(breakdown.special_monthly),
                format_amount(breakdown.special_annual),
            ),
            SalaryRow::monthly(
                "Total Gross Fixed CTC(I)",
                RowKind::FixedTotal,
                format_amount(breakdown.fixed_monthly_total),
                format_amount(breakdown.fixed_annual_total),
            ),
        ];

        rows.extend(breakdown.displayed_bonuses().map(|bonus| {
            SalaryRow::annual_only(
                bonus.label.clone(),
                RowKind::Bonus,
                format_indian_grouping(bonus.annual_amount),
            )
        }));

        if breakdown.has_bonuses() {
            rows.push(SalaryRow::annual_only(
                "Total CTC(I+II):",
                RowKind::CombinedTotal,
                format_indian_grouping(breakdown.combined_annual_total),
            ));
        }

        rows.push(SalaryRow::annual_only(
            "Total CTC(RO):",
            RowKind::GrandTotal,
            format_amount(breakdown.final_annual_total),
        ));

        Self {
            employee_name: header_value(employee_name),
            designation: header_value(designation),
            rows,
        }
    }

    /// Returns the "Total CTC(RO)" row.
    pub fn grand_total(&self) -> Option<&SalaryRow> {
        self.rows.iter().find(|row| row.kind == RowKind::GrandTotal)
    }

    /// Returns the "Total CTC(I+II)" row, if bonuses are present.
    pub fn combined_total(&self) -> Option<&SalaryRow> {
        self.rows.iter().find(|row| row.kind == RowKind::CombinedTotal)
    }
}

fn header_value(value: &str) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}
