//! Request types for the offer engine API.
//!
//! Compensation endpoints accept [`CompensationInput`](crate::models::CompensationInput)
//! directly and the letter endpoint accepts an
//! [`OfferLetter`](crate::models::OfferLetter); the wrappers here cover the rest.

use serde::{Deserialize, Serialize};

use crate::models::{FieldUpdate, OfferLetter};

/// Request body for `/compensation/allocate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// The annual CTC to split, as entered.
    pub annual_ctc: String,
}

/// Request body for `/offer-letters/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterUpdateRequest {
    /// The current form snapshot.
    pub letter: OfferLetter,
    /// Updates to apply, in order.
    #[serde(default)]
    pub updates: Vec<FieldUpdate>,
}
