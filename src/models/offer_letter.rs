//! The offer form record.
//!
//! [`OfferLetter`] is an immutable snapshot of every field on the offer form.
//! Changes are described by [`FieldUpdate`] values and applied by the form
//! reducer, which returns a new snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{OfferError, OfferResult};

use super::compensation::{BonusEntry, CompensationInput};

/// All fields of the offer form, kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferLetter {
    /// Salutation printed before the name (e.g., "Mr.").
    pub salutation: String,
    /// Full name of the candidate.
    pub employee_name: String,
    /// Offered position.
    pub position: String,
    /// Base office location.
    pub location: String,
    /// Date of joining, `YYYY-MM-DD`.
    pub date_of_joining: String,
    /// Last date to accept the offer, `YYYY-MM-DD`.
    pub acceptance_deadline: String,
    /// Annual CTC; drives the monthly split and overrides the headline total.
    pub annual_ctc: String,
    /// Monthly basic pay.
    pub basic_pay: String,
    /// Monthly house rent allowance.
    pub hra: String,
    /// Monthly special allowance.
    pub special_allowance: String,
    /// Probation period in months.
    pub probation_period: String,
    /// Free-text special terms and conditions.
    pub special_clause: String,
    /// Logo image as a data URL.
    pub logo_image: String,
    /// Title of the signing officer.
    pub signatory_title: String,
    /// Name of the signing officer.
    pub signatory_name: String,
    /// Drawn signature as a data URL.
    pub signature_image: String,
    /// Bonus rows in form order.
    pub bonuses: Vec<BonusEntry>,
}

impl Default for OfferLetter {
    fn default() -> Self {
        Self {
            salutation: String::new(),
            employee_name: String::new(),
            position: String::new(),
            location: String::new(),
            date_of_joining: String::new(),
            acceptance_deadline: String::new(),
            annual_ctc: String::new(),
            basic_pay: String::new(),
            hra: String::new(),
            special_allowance: String::new(),
            probation_period: String::new(),
            special_clause: String::new(),
            logo_image: String::new(),
            signatory_title: String::new(),
            signatory_name: String::new(),
            signature_image: String::new(),
            bonuses: vec![BonusEntry::new("Retention Bonus", "")],
        }
    }
}

impl OfferLetter {
    /// Returns the value of a scalar field.
    pub fn get(&self, field: OfferField) -> &str {
        match field {
            OfferField::Salutation => &self.salutation,
            OfferField::EmployeeName => &self.employee_name,
            OfferField::Position => &self.position,
            OfferField::Location => &self.location,
            OfferField::DateOfJoining => &self.date_of_joining,
            OfferField::AcceptanceDeadline => &self.acceptance_deadline,
            OfferField::AnnualCtc => &self.annual_ctc,
            OfferField::BasicPay => &self.basic_pay,
            OfferField::Hra => &self.hra,
            OfferField::SpecialAllowance => &self.special_allowance,
            OfferField::ProbationPeriod => &self.probation_period,
            OfferField::SpecialClause => &self.special_clause,
            OfferField::LogoImage => &self.logo_image,
            OfferField::SignatoryTitle => &self.signatory_title,
            OfferField::SignatoryName => &self.signatory_name,
            OfferField::SignatureImage => &self.signature_image,
        }
    }

    pub(crate) fn field_mut(&mut self, field: OfferField) -> &mut String {
        match field {
            OfferField::Salutation => &mut self.salutation,
            OfferField::EmployeeName => &mut self.employee_name,
            OfferField::Position => &mut self.position,
            OfferField::Location => &mut self.location,
            OfferField::DateOfJoining => &mut self.date_of_joining,
            OfferField::AcceptanceDeadline => &mut self.acceptance_deadline,
            OfferField::AnnualCtc => &mut self.annual_ctc,
            OfferField::BasicPay => &mut self.basic_pay,
            OfferField::Hra => &mut self.hra,
            OfferField::SpecialAllowance => &mut self.special_allowance,
            OfferField::ProbationPeriod => &mut self.probation_period,
            OfferField::SpecialClause => &mut self.special_clause,
            OfferField::LogoImage => &mut self.logo_image,
            OfferField::SignatoryTitle => &mut self.signatory_title,
            OfferField::SignatoryName => &mut self.signatory_name,
            OfferField::SignatureImage => &mut self.signature_image,
        }
    }

    /// Projects the compensation fields into a calculator input.
    ///
    /// A blank annual CTC is passed as no override.
    pub fn compensation_input(&self) -> CompensationInput {
        CompensationInput {
            basic_pay_monthly: self.basic_pay.clone(),
            house_rent_allowance_monthly: self.hra.clone(),
            special_allowance_monthly: self.special_allowance.clone(),
            annual_total_override: Some(self.annual_ctc.clone()).filter(|s| !s.is_empty()),
            bonuses: self.bonuses.clone(),
        }
    }

    /// Checks the fields required before a letter can be previewed or generated.
    ///
    /// The name, position and date of joining must be filled in; the first
    /// blank one is reported.
    pub fn validate(&self) -> OfferResult<()> {
        for field in OfferField::REQUIRED {
            if self.get(field).is_empty() {
                return Err(OfferError::MissingField {
                    field: field.as_str().to_string(),
                });
            }
        }
        Ok(())
    }

    /// The download name, e.g. `Roshan_Saroj_2025-11-06.pdf`.
    pub fn file_name(&self) -> String {
        // Each run of whitespace becomes a single underscore.
        let mut name = String::with_capacity(self.employee_name.len());
        let mut in_whitespace = false;
        for ch in self.employee_name.chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    name.push('_');
                }
                in_whitespace = true;
            } else {
                name.push(ch);
                in_whitespace = false;
            }
        }
        format!("{}_{}.pdf", name, self.date_of_joining.replace('/', "-"))
    }

    /// The first word of the candidate's name, used in the greeting.
    pub fn first_name(&self) -> Option<&str> {
        if self.employee_name.is_empty() {
            return None;
        }
        self.employee_name.split(' ').next()
    }
}

/// A scalar field of the offer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferField {
    /// Salutation.
    Salutation,
    /// Candidate name.
    EmployeeName,
    /// Position.
    Position,
    /// Location.
    Location,
    /// Date of joining.
    DateOfJoining,
    /// Acceptance deadline.
    AcceptanceDeadline,
    /// Annual CTC.
    AnnualCtc,
    /// Monthly basic pay.
    BasicPay,
    /// Monthly HRA.
    Hra,
    /// Monthly special allowance.
    SpecialAllowance,
    /// Probation period.
    ProbationPeriod,
    /// Special clause.
    SpecialClause,
    /// Logo image.
    LogoImage,
    /// Signatory title.
    SignatoryTitle,
    /// Signatory name.
    SignatoryName,
    /// Signature image.
    SignatureImage,
}

impl OfferField {
    /// Fields that must be filled before generation.
    pub const REQUIRED: [OfferField; 3] = [
        OfferField::EmployeeName,
        OfferField::Position,
        OfferField::DateOfJoining,
    ];

    /// Every scalar field, in form order.
    pub const ALL: [OfferField; 16] = [
        OfferField::Salutation,
        OfferField::EmployeeName,
        OfferField::Position,
        OfferField::Location,
        OfferField::DateOfJoining,
        OfferField::AcceptanceDeadline,
        OfferField::AnnualCtc,
        OfferField::BasicPay,
        OfferField::Hra,
        OfferField::SpecialAllowance,
        OfferField::ProbationPeriod,
        OfferField::SpecialClause,
        OfferField::LogoImage,
        OfferField::SignatoryTitle,
        OfferField::SignatoryName,
        OfferField::SignatureImage,
    ];

    /// The snake_case key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferField::Salutation => "salutation",
            OfferField::EmployeeName => "employee_name",
            OfferField::Position => "position",
            OfferField::Location => "location",
            OfferField::DateOfJoining => "date_of_joining",
            OfferField::AcceptanceDeadline => "acceptance_deadline",
            OfferField::AnnualCtc => "annual_ctc",
            OfferField::BasicPay => "basic_pay",
            OfferField::Hra => "hra",
            OfferField::SpecialAllowance => "special_allowance",
            OfferField::ProbationPeriod => "probation_period",
            OfferField::SpecialClause => "special_clause",
            OfferField::LogoImage => "logo_image",
            OfferField::SignatoryTitle => "signatory_title",
            OfferField::SignatoryName => "signatory_name",
            OfferField::SignatureImage => "signature_image",
        }
    }
}

impl fmt::Display for OfferField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfferField {
    type Err = OfferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OfferField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| OfferError::UnknownField {
                field: s.to_string(),
            })
    }
}

/// A single change to the offer form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum FieldUpdate {
    /// Replace a scalar field.
    Set {
        /// The field to change.
        field: OfferField,
        /// The new text.
        value: String,
    },
    /// Replace the label of a bonus row.
    SetBonusLabel {
        /// Row index.
        index: usize,
        /// The new label.
        value: String,
    },
    /// Replace the amount of a bonus row.
    SetBonusAmount {
        /// Row index.
        index: usize,
        /// The new annual amount.
        value: String,
    },
    /// Append an empty bonus row.
    AddBonus,
    /// Remove a bonus row.
    RemoveBonus {
        /// Row index.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_letter() -> OfferLetter {
        OfferLetter {
            employee_name: "Roshan Saroj".to_string(),
            position: "Digital Consultant".to_string(),
            location: "Gurgaon".to_string(),
            date_of_joining: "2025-11-06".to_string(),
            acceptance_deadline: "2025-11-05".to_string(),
            basic_pay: "30000".to_string(),
            hra: "9666".to_string(),
            special_allowance: "14500".to_string(),
            probation_period: "6".to_string(),
            ..OfferLetter::default()
        }
    }

    #[test]
    fn test_default_has_one_blank_retention_bonus() {
        let letter = OfferLetter::default();
        assert_eq!(letter.bonuses, vec![BonusEntry::new("Retention Bonus", "")]);
    }

    #[test]
    fn test_validate_accepts_filled_letter() {
        assert!(filled_letter().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let letter = OfferLetter {
            position: String::new(),
            date_of_joining: String::new(),
            ..filled_letter()
        };

        match letter.validate() {
            Err(OfferError::MissingField { field }) => assert_eq!(field, "position"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_file_name_replaces_spaces_and_slashes() {
        assert_eq!(filled_letter().file_name(), "Roshan_Saroj_2025-11-06.pdf");

        let letter = OfferLetter {
            employee_name: "Asha  Devi Rao".to_string(),
            date_of_joining: "06/11/2025".to_string(),
            ..filled_letter()
        };
        assert_eq!(letter.file_name(), "Asha_Devi_Rao_06-11-2025.pdf");
    }

    #[test]
    fn test_first_name() {
        assert_eq!(filled_letter().first_name(), Some("Roshan"));
        assert_eq!(OfferLetter::default().first_name(), None);
    }

    #[test]
    fn test_compensation_input_projection() {
        let letter = OfferLetter {
            annual_ctc: "650000".to_string(),
            ..filled_letter()
        };
        let input = letter.compensation_input();

        assert_eq!(input.basic_pay_monthly, "30000");
        assert_eq!(input.house_rent_allowance_monthly, "9666");
        assert_eq!(input.special_allowance_monthly, "14500");
        assert_eq!(input.annual_total_override.as_deref(), Some("650000"));
        assert_eq!(input.bonuses.len(), 1);
    }

    #[test]
    fn test_blank_annual_ctc_is_no_override() {
        assert!(filled_letter().compensation_input().annual_total_override.is_none());
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in OfferField::ALL {
            assert_eq!(field.as_str().parse::<OfferField>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field_key() {
        match "salary".parse::<OfferField>() {
            Err(OfferError::UnknownField { field }) => assert_eq!(field, "salary"),
            other => panic!("Expected UnknownField, got {:?}", other),
        }
    }

    #[test]
    fn test_update_deserializes_from_tagged_json() {
        let update: FieldUpdate =
            serde_json::from_str(r#"{"action": "set", "field": "annual_ctc", "value": "650000"}"#)
                .unwrap();
        assert_eq!(
            update,
            FieldUpdate::Set {
                field: OfferField::AnnualCtc,
                value: "650000".to_string(),
            }
        );

        let update: FieldUpdate = serde_json::from_str(r#"{"action": "add_bonus"}"#).unwrap();
        assert_eq!(update, FieldUpdate::AddBonus);
    }
}
