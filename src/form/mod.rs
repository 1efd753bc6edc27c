//! Offer form state handling.
//!
//! The form is an immutable [`OfferLetter`](crate::models::OfferLetter)
//! snapshot. [`apply_update`] produces the next snapshot from a field-keyed
//! change, and [`LetterDetails`] resolves the printed letter text from one.

mod letter;
mod reducer;

pub use letter::{BLANK_LINE, LetterDetails, format_letter_date};
pub use reducer::{apply_update, apply_updates};
