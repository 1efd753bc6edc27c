//! Amount parsing for form fields.
//!
//! Every numeric form field passes through [`parse_amount`], which never
//! fails: blank or malformed text is worth zero. [`parse_amount_strict`] keeps
//! the distinction between a blank field, a malformed one, and a real value
//! for callers that want to validate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Exponents beyond this cannot produce a representable non-zero Decimal.
const MAX_EXPONENT: i64 = 56;

/// Largest magnitude a form amount may have; anything beyond reads as no number.
///
/// Twelve times this, summed over many components and bonus rows, stays far
/// inside the `Decimal` range.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// The outcome of strictly parsing an amount field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ParsedAmount {
    /// The field was empty or whitespace.
    Absent,
    /// The field held something other than a number.
    Invalid,
    /// The field held a number.
    Value(Decimal),
}

impl ParsedAmount {
    /// Collapses the tri-state into the lenient policy: anything but a value is zero.
    pub fn unwrap_or_zero(self) -> Decimal {
        match self {
            ParsedAmount::Value(value) => value,
            ParsedAmount::Absent | ParsedAmount::Invalid => Decimal::ZERO,
        }
    }

    /// Returns the parsed value, if any.
    pub fn value(self) -> Option<Decimal> {
        match self {
            ParsedAmount::Value(value) => Some(value),
            _ => None,
        }
    }
}

/// Parses the leading numeric prefix of a form field.
///
/// Leading whitespace is skipped, then an optional sign, digits with an
/// optional fractional part, and an optional exponent are read. Trailing text
/// is ignored. Returns zero if no number can be read or if its magnitude
/// exceeds [`MAX_AMOUNT`].
///
/// # Examples
///
/// ```
/// use offer_engine::calculation::parse_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(parse_amount(""), Decimal::ZERO);
/// assert_eq!(parse_amount("abc"), Decimal::ZERO);
/// assert_eq!(parse_amount("12000.5"), Decimal::from_str("12000.5").unwrap());
/// assert_eq!(parse_amount("30000 per month"), Decimal::from(30000));
/// ```
pub fn parse_amount(s: &str) -> Decimal {
    read_number(s.trim_start())
        .map(|(value, _)| value)
        .unwrap_or(Decimal::ZERO)
}

/// Parses a form field, requiring the whole trimmed text to be a number.
///
/// # Examples
///
/// ```
/// use offer_engine::calculation::{parse_amount_strict, ParsedAmount};
///
/// assert_eq!(parse_amount_strict("  "), ParsedAmount::Absent);
/// assert_eq!(parse_amount_strict("12k"), ParsedAmount::Invalid);
/// assert!(matches!(parse_amount_strict("12000"), ParsedAmount::Value(_)));
/// ```
pub fn parse_amount_strict(s: &str) -> ParsedAmount {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return ParsedAmount::Absent;
    }

    match read_number(trimmed) {
        Some((value, consumed)) if consumed == trimmed.len() => ParsedAmount::Value(value),
        _ => ParsedAmount::Invalid,
    }
}

/// Reads a number from the start of `s`, returning it with the bytes consumed.
fn read_number(s: &str) -> Option<(Decimal, usize)> {
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    pos += count_digits(&bytes[pos..]);
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let frac_len = count_digits(&bytes[frac_start..]);
        if !int_digits.is_empty() || frac_len > 0 {
            frac_digits = &s[frac_start..frac_start + frac_len];
            pos = frac_start + frac_len;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mantissa = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
    );
    let mut value = Decimal::from_str(&mantissa).ok()?;

    // An exponent only counts if at least one digit follows the marker.
    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
            exp_pos += 1;
        }
        let exp_len = count_digits(&bytes[exp_pos.min(bytes.len())..]);
        if exp_len > 0 {
            let exponent = s[pos + 1..exp_pos + exp_len].parse::<i64>().ok()?;
            value = apply_exponent(value, exponent)?;
            pos = exp_pos + exp_len;
        }
    }

    if value.abs() > Decimal::from(MAX_AMOUNT) {
        return None;
    }

    Some((value, pos))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn apply_exponent(value: Decimal, exponent: i64) -> Option<Decimal> {
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    if exponent < -MAX_EXPONENT {
        return Some(Decimal::ZERO);
    }
    if exponent > MAX_EXPONENT {
        return None;
    }

    let ten = Decimal::TEN;
    let mut result = value;
    if exponent >= 0 {
        for _ in 0..exponent {
            result = result.checked_mul(ten)?;
        }
    } else {
        for _ in 0..exponent.unsigned_abs() {
            result = result.checked_div(ten)?;
        }
    }
    Some(result)
}
