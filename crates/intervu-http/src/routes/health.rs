//! Liveness probe.

use axum::{extract::State, response::Json};
use serde::Serialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: String,
    /// Sessions currently held in memory.
    pub sessions: usize,
}

/// Handler for GET /api/v1/health
///
/// Fails with 500 when the session store can no longer be read.
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    let sessions = state.store.len().map_err(|e| {
        log::error!("Health check failed: {}", e);
        ApiError::Internal("Session store unavailable".to_string())
    })?;

    Ok(Json(HealthResponse {
        status: "ok",
        environment: state.environment.clone(),
        sessions,
    }))
}
