//! Application state for the offer engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::Session;

/// Shared application state.
///
/// Holds the loaded configuration and the login gate. Clones share both.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    session: Arc<Session>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    ///
    /// The session starts logged out.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            session: Arc::new(Session::default()),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the login session.
    pub fn session(&self) -> &Session {
        &self.session
    }
}
