//! HTTP route handlers.
//!
//! Handlers translate requests into `intervu-core` calls and map
//! `SessionError` variants to status codes through [`crate::error::ApiError`].

pub mod auth;
pub mod health;
pub mod sessions;

use axum::response::Json;
use serde_json::{json, Value};

/// Handler for GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "InterVu AI Backend Running" }))
}
