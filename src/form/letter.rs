//! Text fields of the generated letter.
//!
//! Resolves blanks to the printed fallbacks (underlines, company defaults)
//! and formats dates the way the letter shows them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CompanyConfig;
use crate::models::OfferLetter;
use crate::presentation::PLACEHOLDER;

/// Printed where a name, position or location was left blank.
pub const BLANK_LINE: &str = "________";

/// Formats a `YYYY-MM-DD` date as "November 6, 2025".
///
/// Blank or unparseable dates are shown as the placeholder dash.
///
/// # Examples
///
/// ```
/// use offer_engine::form::format_letter_date;
///
/// assert_eq!(format_letter_date("2025-11-06"), "November 6, 2025");
/// assert_eq!(format_letter_date(""), "—");
/// ```
pub fn format_letter_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(date) => format_date(date),
        Err(_) => PLACEHOLDER.to_string(),
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// The resolved text of an offer letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterDetails {
    /// Issuing company.
    pub company_name: String,
    /// "To:" line, salutation and full name.
    pub recipient: String,
    /// Issue date of the letter.
    pub letter_date: String,
    /// Name used after "Dear".
    pub greeting_name: String,
    /// Offered position.
    pub position: String,
    /// Base location.
    pub location: String,
    /// Formatted date of joining.
    pub joining_date: String,
    /// Formatted acceptance deadline, falling back to the joining date.
    pub acceptance_date: String,
    /// Probation length in months.
    pub probation: String,
    /// Special terms, when entered.
    pub special_clause: Option<String>,
    /// Signing officer's title.
    pub signatory_title: String,
    /// Signing officer's name.
    pub signatory_name: String,
}

impl LetterDetails {
    /// Resolves the letter text for a form snapshot issued on `issued_on`.
    pub fn resolve(letter: &OfferLetter, company: &CompanyConfig, issued_on: NaiveDate) -> Self {
        let name = or_default(&letter.employee_name, BLANK_LINE);
        let recipient = if letter.salutation.is_empty() {
            name.to_string()
        } else {
            format!("{} {}", letter.salutation, name)
        };

        let joining_date = format_letter_date(&letter.date_of_joining);
        let acceptance_date = if letter.acceptance_deadline.is_empty() {
            joining_date.clone()
        } else {
            format_letter_date(&letter.acceptance_deadline)
        };

        Self {
            company_name: company.name.clone(),
            recipient,
            letter_date: format_date(issued_on),
            greeting_name: letter.first_name().unwrap_or(BLANK_LINE).to_string(),
            position: or_default(&letter.position, BLANK_LINE).to_string(),
            location: or_default(&letter.location, BLANK_LINE).to_string(),
            joining_date,
            acceptance_date,
            probation: or_default(&letter.probation_period, &company.default_probation).to_string(),
            special_clause: Some(letter.special_clause.clone()).filter(|c| !c.is_empty()),
            signatory_title: or_default(&letter.signatory_title, &company.default_signatory_title)
                .to_string(),
            signatory_name: or_default(&letter.signatory_name, &company.default_signatory_name)
                .to_string(),
        }
    }
}
