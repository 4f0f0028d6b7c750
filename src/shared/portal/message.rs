//! Club Chat Message Data Structure
//!
//! Represents a message in a club chat room. Messages are append-only per
//! room; the display order is arrival order at the client.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chat message in a club room
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClubMessage {
    /// Unique message id
    pub id: Uuid,
    /// Club room this message belongs to
    pub club_id: String,
    /// User who sent the message
    pub sender_id: String,
    /// Message text
    pub content: String,
    /// When the message was sent (RFC3339)
    pub created_at: String,
}

impl ClubMessage {
    /// Create a new message for a room
    pub fn new(club_id: impl Into<String>, sender_id: impl Into<String>, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            club_id: club_id.into(),
            sender_id: sender_id.into(),
            content,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Get a preview of the message (first N characters)
    pub fn preview(&self, max_len: usize) -> String {
        if self.content.chars().count() <= max_len {
            self.content.clone()
        } else {
            let mut preview: String = self.content.chars().take(max_len.saturating_sub(3)).collect();
            preview.push_str("...");
            preview
        }
    }
}

/// Request body for `POST /clubs/sendMessage`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendClubMessageRequest {
    pub club_id: String,
    pub user_id: String,
    pub content: String,
}

/// Response for `POST /clubs/sendMessage`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendClubMessageResponse {
    pub success: bool,
    pub message: Option<ClubMessage>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_message() {
        let msg = ClubMessage::new("chess", "u-1", "hi".to_string());
        assert_eq!(msg.preview(10), "hi");
    }

    #[test]
    fn test_preview_truncates() {
        let msg = ClubMessage::new("chess", "u-1", "a rather long message".to_string());
        let preview = msg.preview(10);
        assert_eq!(preview.chars().count(), 10);
        assert!(preview.ends_with("..."));
    }
}
