//! Interview session routes under `/api/v1/sessions`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use intervu_core::catalog::{known_difficulties, known_roles};
use intervu_core::{Question, SessionConfig, SessionId};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

pub const DEFAULT_NUM_QUESTIONS: i64 = 5;
pub const MIN_NUM_QUESTIONS: i64 = 1;
pub const MAX_NUM_QUESTIONS: i64 = 20;

fn default_num_questions() -> i64 {
    DEFAULT_NUM_QUESTIONS
}

/// Request body for POST /api/v1/sessions/
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub domain: String,
    pub role: String,
    pub difficulty: String,
    #[serde(alias = "num_questions", default = "default_num_questions")]
    pub num_questions: i64,
}

impl CreateSessionRequest {
    /// Check bounds and convert into a core session config.
    fn into_config(self) -> Result<SessionConfig, ApiError> {
        if !(MIN_NUM_QUESTIONS..=MAX_NUM_QUESTIONS).contains(&self.num_questions) {
            return Err(ApiError::BadRequest(format!(
                "numQuestions must be between {} and {}",
                MIN_NUM_QUESTIONS, MAX_NUM_QUESTIONS
            )));
        }

        Ok(SessionConfig {
            domain: self.domain,
            role: self.role,
            difficulty: self.difficulty,
            num_questions: self.num_questions as usize,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: SessionId,
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct DifficultyOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub roles: Vec<&'static str>,
    pub difficulties: Vec<DifficultyOption>,
}

/// Handler for POST /api/v1/sessions/
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateSessionResponse>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        log::warn!("Rejected session request: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    log::info!(
        "Creating session: domain={:?} role={:?} difficulty={:?} num_questions={}",
        request.domain,
        request.role,
        request.difficulty,
        request.num_questions
    );

    let config = request.into_config().inspect_err(|e| {
        log::warn!("Rejected session request: {}", e.message());
    })?;

    let (session_id, questions) = state.store.create(config).map_err(|e| {
        log::error!("Failed to create session: {:?}", e);
        ApiError::Internal("Failed to create session".to_string())
    })?;

    log::info!(
        "Created session {} with {} questions",
        session_id,
        questions.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id,
            questions,
        }),
    ))
}

/// Handler for GET /api/v1/sessions/{session_id}/questions/{sequence}
///
/// `sequence` is 1-based; it is converted to a zero-based position here.
pub async fn get_question(
    State(state): State<Arc<AppState>>,
    params: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Question>, ApiError> {
    let Path((session_id, raw_sequence)) = params.map_err(|rejection| {
        log::warn!("Rejected question lookup: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    let position = sequence_to_position(&raw_sequence).inspect_err(|_| {
        log::warn!(
            "Rejected question lookup for session {}: invalid sequence {:?}",
            session_id,
            raw_sequence
        );
    })?;

    let session_id = SessionId::from(session_id);
    state
        .store
        .get_question(&session_id, position)
        .map(Json)
        .map_err(|e| {
            log::warn!("Question lookup failed: {}", e);
            ApiError::from(e)
        })
}

/// Convert a 1-based `sequence` path segment into a zero-based position.
///
/// Non-integers and values below 1 are rejected. Positive values too large for
/// `i64` saturate, so they fall past the end of any session.
fn sequence_to_position(raw: &str) -> Result<i64, ApiError> {
    let invalid = || ApiError::BadRequest("Sequence must be a positive integer".to_string());
    match raw.parse::<i64>() {
        Ok(sequence) if sequence >= 1 => Ok(sequence - 1),
        Ok(_) => Err(invalid()),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(_) => Err(invalid()),
    }
}

/// Handler for GET /api/v1/sessions/{session_id}
pub async fn session_summary(
    State(state): State<Arc<AppState>>,
    params: Result<Path<String>, PathRejection>,
) -> Result<Json<SessionSummary>, ApiError> {
    let Path(session_id) = params.map_err(|rejection| {
        log::warn!("Rejected session summary: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    let session_id = SessionId::from(session_id);
    let total_questions = state.store.count_questions(&session_id).map_err(|e| {
        log::warn!("Session summary failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(SessionSummary {
        session_id,
        total_questions,
    }))
}

/// Handler for GET /api/v1/sessions/catalog
pub async fn catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        roles: known_roles().collect(),
        difficulties: known_difficulties()
            .map(|(value, label)| DifficultyOption { value, label })
            .collect(),
    })
}
