//! Per-session state.

use crate::generator::Question;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Inputs used to generate a session's questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub domain: String,
    pub role: String,
    pub difficulty: String,
    pub num_questions: usize,
}

/// An interview-practice session with its fixed question list.
#[derive(Debug, Clone)]
pub struct Session {
    /// Unique session identifier
    pub id: SessionId,

    /// Parameters the questions were generated from
    pub config: SessionConfig,

    /// Questions in display order
    questions: Vec<Question>,
}

impl Session {
    pub fn new(id: SessionId, config: SessionConfig, questions: Vec<Question>) -> Self {
        Self {
            id,
            config,
            questions,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question at a zero-based position, if in range.
    pub fn question(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(n: usize) -> Question {
        Question {
            id: format!("q-{n}"),
            text: format!("Question {n}"),
        }
    }

    mod session_id {
        use super::*;

        #[test]
        fn new_generates_unique_ids() {
            let id1 = SessionId::new();
            let id2 = SessionId::new();
            assert_ne!(id1, id2);
        }

        #[test]
        fn new_is_a_uuid() {
            let id = SessionId::new();
            assert!(Uuid::parse_str(&id.0).is_ok());
        }

        #[test]
        fn display_shows_inner_string() {
            let id = SessionId("test-session-123".to_string());
            assert_eq!(format!("{}", id), "test-session-123");
        }

        #[test]
        fn from_str_and_string() {
            assert_eq!(SessionId::from("abc"), SessionId("abc".to_string()));
            assert_eq!(SessionId::from("abc".to_string()), SessionId::from("abc"));
        }

        #[test]
        fn serializes_as_plain_string() {
            let id = SessionId("test-session-456".to_string());
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, "\"test-session-456\"");
        }
    }

    mod session {
        use super::*;

        fn config() -> SessionConfig {
            SessionConfig {
                domain: "fintech".to_string(),
                role: "Backend Engineer".to_string(),
                difficulty: "Hard".to_string(),
                num_questions: 2,
            }
        }

        #[test]
        fn exposes_questions_in_order() {
            let session = Session::new(SessionId::new(), config(), vec![question(1), question(2)]);
            assert_eq!(session.question_count(), 2);
            assert_eq!(session.questions()[0].id, "q-1");
            assert_eq!(session.question(1).unwrap().id, "q-2");
        }

        #[test]
        fn question_out_of_range_is_none() {
            let session = Session::new(SessionId::new(), config(), vec![question(1)]);
            assert!(session.question(1).is_none());
        }
    }
}
