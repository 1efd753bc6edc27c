//! Compensation models for the offer engine.
//!
//! This module contains the raw [`CompensationInput`] captured from the offer
//! form and the derived [`CompensationBreakdown`] handed to the salary table
//! and the document export.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bonus line as typed into the form.
///
/// Both fields are kept as entered; the amount is an annual figure.
///
/// # Example
///
/// ```
/// use offer_engine::models::BonusEntry;
///
/// let bonus = BonusEntry::new("Retention Bonus", "100000");
/// assert_eq!(bonus.label, "Retention Bonus");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusEntry {
    /// The bonus type shown in the table (e.g., "Joining Bonus").
    pub label: String,
    /// The annual bonus amount as a decimal string.
    pub amount: String,
}

impl BonusEntry {
    /// Creates a bonus entry from a label and annual amount.
    pub fn new(label: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amount: amount.into(),
        }
    }
}

/// The compensation fields of the offer form, as raw strings.
///
/// A fresh input is built from the form on every change; nothing here is
/// validated; blank or malformed amounts count as zero downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompensationInput {
    /// Monthly basic pay.
    pub basic_pay_monthly: String,
    /// Monthly house rent allowance.
    pub house_rent_allowance_monthly: String,
    /// Monthly special allowance.
    pub special_allowance_monthly: String,
    /// A negotiated annual CTC that replaces the computed total when positive.
    pub annual_total_override: Option<String>,
    /// Bonus lines in form order.
    pub bonuses: Vec<BonusEntry>,
}

impl CompensationInput {
    /// Creates an input from the three monthly components with no override or bonuses.
    pub fn from_monthly(
        basic: impl Into<String>,
        hra: impl Into<String>,
        special: impl Into<String>,
    ) -> Self {
        Self {
            basic_pay_monthly: basic.into(),
            house_rent_allowance_monthly: hra.into(),
            special_allowance_monthly: special.into(),
            annual_total_override: None,
            bonuses: Vec::new(),
        }
    }

    /// Sets the annual total override.
    pub fn with_override(mut self, annual: impl Into<String>) -> Self {
        self.annual_total_override = Some(annual.into());
        self
    }

    /// Appends a bonus line.
    pub fn with_bonus(mut self, label: impl Into<String>, amount: impl Into<String>) -> Self {
        self.bonuses.push(BonusEntry::new(label, amount));
        self
    }
}

/// A bonus line after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusLine {
    /// The label as entered.
    pub label: String,
    /// The parsed annual amount (zero when blank or malformed).
    pub annual_amount: Decimal,
    /// Whether this line is shown in the table and counted in the bonus total.
    pub displayed: bool,
}

/// Where the final annual total came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalSource {
    /// The entered annual CTC, used verbatim.
    Override,
    /// The rounded annualised sum of the fixed monthly components.
    FixedComponents,
}

/// Every derived figure shown in the salary structure.
///
/// Annual fields are exactly twelve times their monthly counterparts and carry
/// full precision; rounding happens only in `final_annual_total` and at
/// display time. Recomputed on every render and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationBreakdown {
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
    /// Sum of the three monthly components, "Total Gross Fixed CTC(I)".
    pub fixed_monthly_total: Decimal,
    /// The fixed monthly total times twelve.
    pub fixed_annual_total: Decimal,
    /// Every bonus line, including the ones excluded from the total.
    pub bonus_lines: Vec<BonusLine>,
    /// Sum of the displayed bonus lines.
    pub bonus_annual_total: Decimal,
    /// Fixed annual total plus bonuses, "Total CTC(I+II)".
    pub combined_annual_total: Decimal,
    /// The headline figure, "Total CTC(RO)".
    pub final_annual_total: Decimal,
    /// Whether `final_annual_total` came from the override.
    pub total_source: TotalSource,
}

impl CompensationBreakdown {
    /// Returns true if the "Total CTC(I+II)" line should be shown.
    pub fn has_bonuses(&self) -> bool {
        self.bonus_annual_total > Decimal::ZERO
    }

    /// Returns the bonus lines that appear in the table.
    pub fn displayed_bonuses(&self) -> impl Iterator<Item = &BonusLine> {
        self.bonus_lines.iter().filter(|line| line.displayed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_builder_sets_all_fields() {
        let input = CompensationInput::from_monthly("30000", "9666", "14500")
            .with_override("700000")
            .with_bonus("Retention Bonus", "50000");

        assert_eq!(input.basic_pay_monthly, "30000");
        assert_eq!(input.house_rent_allowance_monthly, "9666");
        assert_eq!(input.special_allowance_monthly, "14500");
        assert_eq!(input.annual_total_override.as_deref(), Some("700000"));
        assert_eq!(input.bonuses, vec![BonusEntry::new("Retention Bonus", "50000")]);
    }

    #[test]
    fn test_input_deserializes_with_missing_fields() {
        let input: CompensationInput =
            serde_json::from_str(r#"{"basic_pay_monthly": "30000"}"#).unwrap();

        assert_eq!(input.basic_pay_monthly, "30000");
        assert_eq!(input.house_rent_allowance_monthly, "");
        assert!(input.annual_total_override.is_none());
        assert!(input.bonuses.is_empty());
    }

    #[test]
    fn test_total_source_serializes_snake_case() {
        let json = serde_json::to_string(&TotalSource::FixedComponents).unwrap();
        assert_eq!(json, "\"fixed_components\"");
    }
}
