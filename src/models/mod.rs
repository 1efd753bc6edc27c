//! Core data models for the offer engine.
//!
//! This module contains the form record, the compensation input and its
//! derived breakdown, and the login session flag.

mod compensation;
mod offer_letter;
mod session;

pub use compensation::{
    BonusEntry, BonusLine, CompensationBreakdown, CompensationInput, TotalSource,
};
pub use offer_letter::{FieldUpdate, OfferField, OfferLetter};
pub use session::Session;
