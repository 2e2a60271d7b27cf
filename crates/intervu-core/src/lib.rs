//! # intervu-core
//!
//! Core business logic for InterVu, the interview-practice backend.
//!
//! This crate is framework-agnostic; the HTTP layer lives in `intervu-http`.
//!
//! ## Key Concepts
//!
//! - **Template**: a question string with `{domain}`, `{role}` and
//!   `{difficulty}` placeholders
//! - **Session**: a generated, immutable list of questions under a unique id
//! - **Position**: zero-based index of a question within its session

pub mod catalog;
pub mod generator;
pub mod session;

// Re-export commonly used types
pub use generator::{generate, Question};
pub use session::{Session, SessionConfig, SessionError, SessionId, SessionStore};
