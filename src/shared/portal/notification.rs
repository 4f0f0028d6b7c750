//! Notification Data Structures
//!
//! Notifications are created server-side and arrive either in a polled batch
//! or as a single push-delivered event. The client never deletes them; the
//! only local mutation is the optimistic read flag.

use serde::{Deserialize, Serialize};

/// What triggered a notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Someone reacted to a post of yours
    Reaction,
    /// Someone commented on a post of yours
    Comment,
    /// You were mentioned
    Mention,
    /// A club you belong to posted an announcement
    ClubAnnouncement,
    /// A quiz result is available
    QuizResult,
    /// Free-form system notice
    System,
}

/// A single notification as delivered by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification id
    pub id: String,
    /// Who the notification is for
    pub recipient_id: String,
    /// Whether the user has seen it
    pub read: bool,
    /// When the notification was created (RFC3339)
    pub created_at: String,
    /// What triggered it
    pub kind: NotificationKind,
    /// Kind-specific data (post id, club id, etc.)
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl Notification {
    /// Create an unread notification (client-side only in tests and demos)
    pub fn new(id: impl Into<String>, recipient_id: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: id.into(),
            recipient_id: recipient_id.into(),
            read: false,
            created_at: chrono::Utc::now().to_rfc3339(),
            kind,
            payload: serde_json::Value::Null,
        }
    }
}

/// Response for `GET /notifications/get/{userId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNotificationsResponse {
    pub success: bool,
    pub notifications: Vec<Notification>,
}

/// Request body for `POST /notifications/markAsRead`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAsReadRequest {
    pub notification_id: String,
}

/// Response for `POST /notifications/markAsRead`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAsReadResponse {
    pub success: bool,
}
