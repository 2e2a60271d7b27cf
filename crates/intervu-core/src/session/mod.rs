//! Interview sessions and their in-memory store.
//!
//! A session is created once with a generated question list and is read-only
//! from then on. Sessions live until the process exits.

mod state;
mod store;

pub use state::{Session, SessionConfig, SessionId};
pub use store::{SessionError, SessionStore};
