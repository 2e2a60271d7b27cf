//! Error responses for HTTP handlers.
//!
//! Every error body has the shape `{"detail": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use intervu_core::SessionError;
use serde::Serialize;
use std::any::Any;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request failed shape or range validation.
    BadRequest(String),
    NotFound(String),
    /// Unexpected failure. The message is shown to the caller, so keep it generic.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(m) | ApiError::NotFound(m) | ApiError::Internal(m) => m,
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::NotFound(_) => ApiError::NotFound("Session not found".to_string()),
            SessionError::QuestionIndexOutOfRange { .. } => {
                ApiError::NotFound("Question not found".to_string())
            }
            SessionError::StoreUnavailable => {
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Response for a handler that panicked. The panic message is only logged.
pub(crate) fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    log::error!("Handler panicked: {}", message);

    ApiError::Internal("Internal server error".to_string()).into_response()
}
