//! HTTP API module for the offer engine.
//!
//! This module exposes the compensation calculator and the offer form
//! endpoints over HTTP.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AllocationRequest, LetterUpdateRequest};
pub use response::{ApiError, OfferLetterResponse, SessionResponse};
pub use state::AppState;
