//! Amount formatting for the salary table and letter.
//!
//! Amounts use the Indian numbering system: the last three digits form one
//! group and every group above it has two digits (1,00,000 and 1,23,45,678).
//! Zero amounts are shown as an em-dash.

use rust_decimal::{Decimal, RoundingStrategy};

/// Shown in place of a zero or blank amount.
pub const PLACEHOLDER: &str = "—";

/// Fraction digits kept when displaying an amount.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats a table cell: grouped when positive, the placeholder otherwise.
///
/// # Examples
///
/// ```
/// use offer_engine::presentation::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::from(649992)), "6,49,992");
/// assert_eq!(format_amount(Decimal::ZERO), "—");
/// ```
pub fn format_amount(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format_indian_grouping(value)
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Formats any amount with Indian digit grouping and up to three decimals.
pub fn format_indian_grouping(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut formatted = String::with_capacity(digits.len() + digits.len() / 2 + 1);
    if negative {
        formatted.push('-');
    }
    formatted.push_str(&group_indian(integer));
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }

    let (head, tail) = integer.split_at(integer.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let lead = match head.len() % 2 {
        0 => 2,
        n => n,
    };
    groups.push(&head[..lead]);
    let mut pos = lead;
    while pos < head.len() {
        groups.push(&head[pos..pos + 2]);
        pos += 2;
    }
    groups.push(tail);
    groups.join(",")
}
