//! Login placeholder.
//!
//! Accepts any credentials and echoes the email back. No token or session is
//! issued; callers must not treat a 200 here as authentication.

use axum::{
    extract::rejection::JsonRejection,
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub email: String,
}

/// Handler for POST /api/v1/auth/login
pub async fn login(
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        log::warn!("Rejected login request: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    log::info!("Login request for {}", request.email);

    Ok(Json(LoginResponse {
        message: "Login API working".to_string(),
        email: request.email,
    }))
}
