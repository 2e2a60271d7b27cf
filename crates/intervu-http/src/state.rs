//! Shared state for the HTTP server.
//!
//! Wraps the SessionStore and any other state needed by HTTP handlers.

use intervu_core::SessionStore;
use std::sync::Arc;

/// Shared state available to all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store holding every session created by this process.
    pub store: Arc<SessionStore>,

    /// Deployment environment name (e.g. "development"), reported by health checks.
    pub environment: String,
}

impl AppState {
    /// Create a new shared state around the given store.
    pub fn new(store: Arc<SessionStore>, environment: impl Into<String>) -> Self {
        Self {
            store,
            environment: environment.into(),
        }
    }
}
