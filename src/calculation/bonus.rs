//! Bonus totalling.
//!
//! Bonus amounts are annual figures. A bonus only appears in the salary table,
//! and only counts towards the bonus total, when it has a label and a positive
//! amount. Every entry is still kept as a [`BonusLine`].

use rust_decimal::Decimal;

use crate::models::{BonusEntry, BonusLine};

use super::amount::parse_amount;

/// Returns true if the entry is shown in the table and counted in the total.
pub fn is_countable_bonus(entry: &BonusEntry) -> bool {
    !entry.label.is_empty() && parse_amount(&entry.amount) > Decimal::ZERO
}

/// Sums the annual amounts of the countable bonus entries.
///
/// # Examples
///
/// ```
/// use offer_engine::calculation::compute_bonus_total;
/// use offer_engine::models::BonusEntry;
/// use rust_decimal::Decimal;
///
/// let bonuses = vec![
///     BonusEntry::new("", "500"),
///     BonusEntry::new("X", "0"),
///     BonusEntry::new("Y", "1000"),
/// ];
/// assert_eq!(compute_bonus_total(&bonuses), Decimal::from(1000));
/// ```
pub fn compute_bonus_total(bonuses: &[BonusEntry]) -> Decimal {
    bonuses
        .iter()
        .filter(|entry| is_countable_bonus(entry))
        .map(|entry| parse_amount(&entry.amount))
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Parses every bonus entry, marking which ones are displayed.
pub fn bonus_lines(bonuses: &[BonusEntry]) -> Vec<BonusLine> {
    bonuses
        .iter()
        .map(|entry| BonusLine {
            label: entry.label.clone(),
            annual_amount: parse_amount(&entry.amount),
            displayed: is_countable_bonus(entry),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_only_labelled_positive_entries_count() {
        let bonuses = vec![
            BonusEntry::new("", "500"),
            BonusEntry::new("X", "0"),
            BonusEntry::new("Y", "1000"),
        ];

        assert_eq!(compute_bonus_total(&bonuses), dec("1000"));
    }

    #[test]
    fn test_negative_and_malformed_amounts_are_excluded() {
        let bonuses = vec![
            BonusEntry::new("Clawback", "-2000"),
            BonusEntry::new("Joining Bonus", "abc"),
            BonusEntry::new("Retention Bonus", "100000"),
            BonusEntry::new("Relocation", "25000.50"),
        ];

        assert_eq!(compute_bonus_total(&bonuses), dec("125000.50"));
    }

    #[test]
    fn test_empty_list_totals_zero() {
        assert_eq!(compute_bonus_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_default_form_bonus_row_is_blank() {
        let bonuses = vec![BonusEntry::new("Retention Bonus", "")];
        assert_eq!(compute_bonus_total(&bonuses), Decimal::ZERO);
    }

    #[test]
    fn test_lines_keep_excluded_entries() {
        let bonuses = vec![BonusEntry::new("", "500"), BonusEntry::new("Y", "1000")];

        let lines = bonus_lines(&bonuses);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].annual_amount, dec("500"));
        assert!(!lines[0].displayed);
        assert_eq!(lines[1].label, "Y");
        assert!(lines[1].displayed);
    }
}
