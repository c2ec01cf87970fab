//! Application state shared across request handlers

use crate::{auth::SharedLoginState, session::SessionRegistry, WebConfig};
use tracing::info;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: WebConfig,
    /// In-memory session storage, keyed by the visitor's session cookie
    pub sessions: SessionRegistry,
    /// Login state of the (single) account owning this instance
    pub login: SharedLoginState,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: WebConfig) -> Self {
        let state = Self {
            config,
            sessions: SessionRegistry::default(),
            login: SharedLoginState::default(),
        };

        info!("Application state initialized");
        state
    }
}
