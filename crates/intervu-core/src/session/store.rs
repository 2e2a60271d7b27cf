//! SessionStore - in-memory home for every generated session.

use super::state::{Session, SessionConfig, SessionId};
use crate::generator::{generate, Question};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Question index {position} out of range for {count} questions")]
    QuestionIndexOutOfRange { position: i64, count: usize },

    #[error("Session store lock poisoned")]
    StoreUnavailable,
}

/// Thread-safe, process-lifetime store of sessions.
///
/// Sessions are inserted once by [`SessionStore::create`] and never modified
/// or evicted afterwards. Share a single instance behind an `Arc`.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate questions for `config` and store them under a fresh id.
    pub fn create(
        &self,
        config: SessionConfig,
    ) -> Result<(SessionId, Vec<Question>), SessionError> {
        let id = SessionId::new();
        let questions = generate(
            &config.domain,
            &config.role,
            &config.difficulty,
            config.num_questions,
        );

        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| SessionError::StoreUnavailable)?;
        sessions.insert(
            id.clone(),
            Session::new(id.clone(), config, questions.clone()),
        );
        log::debug!("Stored session {} ({} total)", id, sessions.len());

        Ok((id, questions))
    }

    /// Question at a zero-based `position` within a session.
    pub fn get_question(
        &self,
        session_id: &SessionId,
        position: i64,
    ) -> Result<Question, SessionError> {
        let sessions = self.read()?;
        let session = sessions
            .get(session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.clone()))?;

        let count = session.question_count();
        usize::try_from(position)
            .ok()
            .and_then(|index| session.question(index))
            .cloned()
            .ok_or(SessionError::QuestionIndexOutOfRange { position, count })
    }

    /// Number of questions stored for a session.
    pub fn count_questions(&self, session_id: &SessionId) -> Result<usize, SessionError> {
        self.read()?
            .get(session_id)
            .map(Session::question_count)
            .ok_or_else(|| SessionError::NotFound(session_id.clone()))
    }

    /// Number of stored sessions.
    pub fn len(&self) -> Result<usize, SessionError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, SessionError> {
        Ok(self.len()? == 0)
    }

    /// Poison the store lock so every later operation fails with
    /// [`SessionError::StoreUnavailable`].
    #[cfg(any(test, feature = "test-util"))]
    pub fn poison(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self.sessions.write();
            panic!("session store poisoned on purpose");
        }));
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<SessionId, Session>>, SessionError> {
        self.sessions
            .read()
            .map_err(|_| SessionError::StoreUnavailable)
    }
}
