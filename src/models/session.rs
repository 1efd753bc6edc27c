//! The login gate in front of the offer form.
//!
//! This is a local flag only: logging in checks no credentials.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{OfferError, OfferResult};

/// Whether the form is currently unlocked.
///
/// # Example
///
/// ```
/// use offer_engine::models::Session;
///
/// let session = Session::default();
/// assert!(!session.is_authenticated());
/// session.login();
/// assert!(session.require().is_ok());
/// ```
#[derive(Debug, Default)]
pub struct Session {
    authenticated: AtomicBool,
}

impl Session {
    /// Opens the gate.
    pub fn login(&self) {
        self.authenticated.store(true, Ordering::Release);
    }

    /// Closes the gate.
    pub fn logout(&self) {
        self.authenticated.store(false, Ordering::Release);
    }

    /// Returns true while logged in.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Acquire)
    }

    /// Fails with `NotAuthenticated` unless logged in.
    pub fn require(&self) -> OfferResult<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(OfferError::NotAuthenticated)
        }
    }
}
