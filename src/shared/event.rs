/**
 * Push Event System
 *
 * This module defines the events the server pushes to a connected client
 * outside the request/response cycle: single notifications, reaction-count
 * changes from other users, and club chat messages.
 */
use serde::{Deserialize, Serialize};

use crate::shared::portal::{ClubMessage, Notification};

/// A server-initiated event delivered over the push stream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PushEvent {
    /// A single notification for some recipient (filtered client-side)
    Notification(Notification),
    /// Another user's reaction changed a post's counts
    ReactionUpdate {
        post_id: String,
        likes: u64,
        dislikes: u64,
    },
    /// A message arrived in a club room
    ClubMessage(ClubMessage),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::portal::NotificationKind;

    #[test]
    fn test_event_round_trip() {
        let event = PushEvent::ReactionUpdate {
            post_id: "p1".to_string(),
            likes: 7,
            dislikes: 1,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"reaction_update\""));
        let back: PushEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_notification_event_tag() {
        let event = PushEvent::Notification(Notification::new(
            "n-1",
            "u-1",
            NotificationKind::Comment,
        ));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"notification\""));
    }
}
