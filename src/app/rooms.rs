//! Club Chat Rooms
//!
//! Per-club append-only message sequences in arrival order. The client joins
//! and leaves rooms by club id; pushed messages for rooms it has not joined
//! are dropped. Sent messages appear when the server's push echo arrives, so
//! every participant sees the same arrival order.

use std::collections::{HashMap, HashSet};

use crate::shared::portal::ClubMessage;

/// Message state for the club rooms the session user has joined
pub struct ClubRooms {
    joined: HashSet<String>,
    messages: HashMap<String, Vec<ClubMessage>>,
}

impl Default for ClubRooms {
    fn default() -> Self {
        Self::new()
    }
}

impl ClubRooms {
    pub fn new() -> Self {
        Self {
            joined: HashSet::new(),
            messages: HashMap::new(),
        }
    }

    /// Join a room; idempotent
    pub fn join(&mut self, club_id: &str) {
        if self.joined.insert(club_id.to_string()) {
            tracing::debug!("[CLUBS] joined room {club_id}");
            self.messages.entry(club_id.to_string()).or_default();
        }
    }

    /// Leave a room, dropping its local history
    pub fn leave(&mut self, club_id: &str) {
        if self.joined.remove(club_id) {
            tracing::debug!("[CLUBS] left room {club_id}");
            self.messages.remove(club_id);
        }
    }

    pub fn is_joined(&self, club_id: &str) -> bool {
        self.joined.contains(club_id)
    }

    /// Room ids, unordered
    pub fn joined_rooms(&self) -> impl Iterator<Item = &str> {
        self.joined.iter().map(String::as_str)
    }

    /// Messages for a room in arrival order
    pub fn messages(&self, club_id: &str) -> &[ClubMessage] {
        self.messages.get(club_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append a pushed message; dropped when the room is not joined
    pub fn apply_push(&mut self, message: ClubMessage) {
        if !self.joined.contains(&message.club_id) {
            tracing::debug!("[CLUBS] message for unjoined room {} dropped", message.club_id);
            return;
        }
        if let Some(room) = self.messages.get_mut(&message.club_id) {
            room.push(message);
        }
    }

    /// Leave every room (logout)
    pub fn clear(&mut self) {
        self.joined.clear();
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(club_id: &str, content: &str) -> ClubMessage {
        ClubMessage::new(club_id, "u-2", content.to_string())
    }

    #[test]
    fn test_messages_keep_arrival_order() {
        let mut rooms = ClubRooms::new();
        rooms.join("chess");
        rooms.apply_push(msg("chess", "first"));
        rooms.apply_push(msg("chess", "second"));

        let contents: Vec<_> = rooms.messages("chess").iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
    }

    #[test]
    fn test_unjoined_room_drops_messages() {
        let mut rooms = ClubRooms::new();
        rooms.apply_push(msg("chess", "hello"));
        assert!(rooms.messages("chess").is_empty());
    }

    #[test]
    fn test_leave_drops_history() {
        let mut rooms = ClubRooms::new();
        rooms.join("chess");
        rooms.apply_push(msg("chess", "hello"));
        rooms.leave("chess");

        assert!(!rooms.is_joined("chess"));
        assert!(rooms.messages("chess").is_empty());
    }

    #[test]
    fn test_join_is_idempotent() {
        let mut rooms = ClubRooms::new();
        rooms.join("chess");
        rooms.apply_push(msg("chess", "hello"));
        rooms.join("chess");

        assert_eq!(rooms.messages("chess").len(), 1);
    }
}
