//! Session Context
//!
//! An explicit session handle constructed at login and dropped at logout.
//! Components receive it as an argument instead of reading ambient browser
//! storage, which keeps state transitions testable and deterministic.

use serde::{Deserialize, Serialize};

/// The authenticated user's session, valid from login until logout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionContext {
    /// Id of the logged-in user
    pub user_id: String,
    /// Display name of the logged-in user
    pub username: String,
    /// When the session started (RFC3339)
    pub started_at: String,
}

impl SessionContext {
    /// Create a session for the given user
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Whether a notification or push event is addressed to this session
    pub fn owns(&self, recipient_id: &str) -> bool {
        self.user_id == recipient_id
    }
}
