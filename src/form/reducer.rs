//! Pure update function for the offer form.

use tracing::debug;

use crate::calculation::allocate_annual_ctc;
use crate::config::AllocationConfig;
use crate::error::{OfferError, OfferResult};
use crate::models::{BonusEntry, FieldUpdate, OfferField, OfferLetter};

/// Applies one update and returns the resulting form snapshot.
///
/// Setting the annual CTC also rewrites the three monthly components from
/// the allocation split; they become blank when the CTC is zero or blank.
/// Bonus updates fail with `BonusIndexOutOfRange` if the row does not exist.
/// The input snapshot is never modified.
///
/// # Examples
///
/// ```
/// use offer_engine::config::AllocationConfig;
/// use offer_engine::form::apply_update;
/// use offer_engine::models::{FieldUpdate, OfferField, OfferLetter};
///
/// let letter = OfferLetter::default();
/// let updated = apply_update(
///     &letter,
///     FieldUpdate::Set { field: OfferField::AnnualCtc, value: "650000".to_string() },
///     &AllocationConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(updated.basic_pay, "24998");
/// assert_eq!(updated.hra, "8055");
/// assert_eq!(updated.special_allowance, "21114");
/// ```
pub fn apply_update(
    letter: &OfferLetter,
    update: FieldUpdate,
    allocation: &AllocationConfig,
) -> OfferResult<OfferLetter> {
    let mut next = letter.clone();

    match update {
        FieldUpdate::Set { field, value } => {
            if field == OfferField::AnnualCtc {
                apply_split(&mut next, &value, allocation);
            }
            *next.field_mut(field) = value;
        }
        FieldUpdate::SetBonusLabel { index, value } => {
            bonus_mut(&mut next, index)?.label = value;
        }
        FieldUpdate::SetBonusAmount { index, value } => {
            bonus_mut(&mut next, index)?.amount = value;
        }
        FieldUpdate::AddBonus => {
            next.bonuses.push(BonusEntry::default());
        }
        FieldUpdate::RemoveBonus { index } => {
            check_bonus_index(&next, index)?;
            next.bonuses.remove(index);
        }
    }

    Ok(next)
}

/// Applies a sequence of updates in order, stopping at the first failure.
pub fn apply_updates(
    letter: &OfferLetter,
    updates: impl IntoIterator<Item = FieldUpdate>,
    allocation: &AllocationConfig,
) -> OfferResult<OfferLetter> {
    updates
        .into_iter()
        .try_fold(letter.clone(), |current, update| {
            apply_update(&current, update, allocation)
        })
}

fn apply_split(letter: &mut OfferLetter, annual_ctc: &str, allocation: &AllocationConfig) {
    match allocate_annual_ctc(annual_ctc, allocation) {
        Some(split) => {
            debug!(
                annual_ctc,
                basic = %split.basic_monthly,
                hra = %split.hra_monthly,
                special = %split.special_monthly,
                "Allocated annual CTC to monthly components"
            );
            letter.basic_pay = split.basic_monthly.normalize().to_string();
            letter.hra = split.hra_monthly.normalize().to_string();
            letter.special_allowance = split.special_monthly.normalize().to_string();
        }
        None => {
            letter.basic_pay.clear();
            letter.hra.clear();
            letter.special_allowance.clear();
        }
    }
}

fn check_bonus_index(letter: &OfferLetter, index: usize) -> OfferResult<()> {
    if index < letter.bonuses.len() {
        Ok(())
    } else {
        Err(OfferError::BonusIndexOutOfRange {
            index,
            len: letter.bonuses.len(),
        })
    }
}

fn bonus_mut(letter: &mut OfferLetter, index: usize) -> OfferResult<&mut BonusEntry> {
    check_bonus_index(letter, index)?;
    Ok(&mut letter.bonuses[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(field: OfferField, value: &str) -> FieldUpdate {
        FieldUpdate::Set {
            field,
            value: value.to_string(),
        }
    }

    fn apply(letter: &OfferLetter, update: FieldUpdate) -> OfferResult<OfferLetter> {
        apply_update(letter, update, &AllocationConfig::default())
    }

    #[test]
    fn test_set_plain_field_leaves_input_untouched() {
        let letter = OfferLetter::default();
        let updated = apply(&letter, set(OfferField::EmployeeName, "Roshan Saroj")).unwrap();

        assert_eq!(updated.employee_name, "Roshan Saroj");
        assert_eq!(letter.employee_name, "");
    }

    #[test]
    fn test_annual_ctc_rewrites_monthly_components() {
        let letter = OfferLetter {
            basic_pay: "30000".to_string(),
            ..OfferLetter::default()
        };
        let updated = apply(&letter, set(OfferField::AnnualCtc, "650000")).unwrap();

        assert_eq!(updated.annual_ctc, "650000");
        assert_eq!(updated.basic_pay, "24998");
        assert_eq!(updated.hra, "8055");
        assert_eq!(updated.special_allowance, "21114");
    }

    #[test]
    fn test_blank_annual_ctc_blanks_components() {
        let letter = OfferLetter {
            basic_pay: "30000".to_string(),
            hra: "9666".to_string(),
            special_allowance: "14500".to_string(),
            ..OfferLetter::default()
        };
        let updated = apply(&letter, set(OfferField::AnnualCtc, "")).unwrap();

        assert_eq!(updated.basic_pay, "");
        assert_eq!(updated.hra, "");
        assert_eq!(updated.special_allowance, "");
    }

    #[test]
    fn test_monthly_component_edit_keeps_annual_ctc() {
        let letter = apply(&OfferLetter::default(), set(OfferField::AnnualCtc, "650000")).unwrap();
        let updated = apply(&letter, set(OfferField::BasicPay, "26000")).unwrap();

        assert_eq!(updated.basic_pay, "26000");
        assert_eq!(updated.annual_ctc, "650000");
        assert_eq!(updated.hra, "8055");
    }

    #[test]
    fn test_bonus_row_lifecycle() {
        let letter = OfferLetter::default();
        let letter = apply(&letter, FieldUpdate::AddBonus).unwrap();
        assert_eq!(letter.bonuses.len(), 2);

        let letter = apply(
            &letter,
            FieldUpdate::SetBonusLabel {
                index: 1,
                value: "Joining Bonus".to_string(),
            },
        )
        .unwrap();
        let letter = apply(
            &letter,
            FieldUpdate::SetBonusAmount {
                index: 1,
                value: "50000".to_string(),
            },
        )
        .unwrap();
        assert_eq!(letter.bonuses[1], BonusEntry::new("Joining Bonus", "50000"));

        let letter = apply(&letter, FieldUpdate::RemoveBonus { index: 0 }).unwrap();
        assert_eq!(letter.bonuses, vec![BonusEntry::new("Joining Bonus", "50000")]);
    }

    #[test]
    fn test_bonus_index_out_of_range() {
        let result = apply(
            &OfferLetter::default(),
            FieldUpdate::SetBonusAmount {
                index: 4,
                value: "1".to_string(),
            },
        );

        match result {
            Err(OfferError::BonusIndexOutOfRange { index, len }) => {
                assert_eq!(index, 4);
                assert_eq!(len, 1);
            }
            other => panic!("Expected BonusIndexOutOfRange, got {:?}", other),
        }

        assert!(apply(&OfferLetter::default(), FieldUpdate::RemoveBonus { index: 1 }).is_err());
    }

    #[test]
    fn test_apply_updates_in_sequence() {
        let letter = apply_updates(
            &OfferLetter::default(),
            vec![
                set(OfferField::EmployeeName, "Roshan Saroj"),
                set(OfferField::Position, "Digital Consultant"),
                set(OfferField::DateOfJoining, "2025-11-06"),
            ],
            &AllocationConfig::default(),
        )
        .unwrap();

        assert!(letter.validate().is_ok());
    }
}
