//! Notification Center
//!
//! Maintains the notification list and unread count, refreshed by a
//! fixed-interval poll and supplemented by push-delivered events.
//!
//! Delivery is at-least-once (the same notification can arrive by poll and by
//! push); the effect is exactly-once through id-based deduplication in an
//! ordered list. Mark-read is an idempotent optimistic flip with no rollback;
//! locally-read ids are remembered so a poll that still shows an entry unread
//! due to server lag cannot un-read it.

use std::collections::HashSet;

use crate::shared::portal::Notification;
use crate::shared::SessionContext;

/// Ordered, id-unique notification list for the session user
pub struct NotificationCenter {
    /// Newest first
    items: Vec<Notification>,
    ids: HashSet<String>,
    /// Ids the user marked read locally; survives lagging polls
    locally_read: HashSet<String>,
    unread: usize,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            ids: HashSet::new(),
            locally_read: HashSet::new(),
            unread: 0,
        }
    }

    /// The notification list, newest first
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Count of entries with `read == false`
    pub fn unread_count(&self) -> usize {
        self.unread
    }

    /// Adopt a polled batch.
    ///
    /// The batch becomes the list, with one exception: an entry that is
    /// listed but absent from the batch was pushed after the server built
    /// this response, so it stays (ahead of the batch, it is newer). Entries
    /// the user already marked read locally stay read even if the server
    /// still reports them unread.
    pub fn apply_poll(&mut self, batch: Vec<Notification>) {
        let batch_ids: HashSet<String> = batch.iter().map(|n| n.id.clone()).collect();

        let mut merged: Vec<Notification> = self
            .items
            .drain(..)
            .filter(|n| !batch_ids.contains(&n.id))
            .collect();
        self.ids.clear();
        for kept in &merged {
            self.ids.insert(kept.id.clone());
        }

        for mut notification in batch {
            if !self.ids.insert(notification.id.clone()) {
                continue;
            }
            if self.locally_read.contains(&notification.id) {
                notification.read = true;
            }
            merged.push(notification);
        }

        self.items = merged;
        self.recount();
        tracing::debug!(
            "[NOTIFY] poll applied: {} items, {} unread",
            self.items.len(),
            self.unread
        );
    }

    /// Merge a push-delivered notification.
    ///
    /// Dropped if it is not addressed to the session user or if its id is
    /// already present (duplicate delivery is a no-op).
    pub fn apply_push(&mut self, notification: Notification, session: &SessionContext) {
        if !session.owns(&notification.recipient_id) {
            return;
        }
        if self.ids.contains(&notification.id) {
            tracing::debug!("[NOTIFY] duplicate push {} ignored", notification.id);
            return;
        }

        let mut notification = notification;
        if self.locally_read.contains(&notification.id) {
            notification.read = true;
        }
        self.ids.insert(notification.id.clone());
        self.items.insert(0, notification);
        self.recount();
    }

    /// Optimistically mark a notification read.
    ///
    /// Idempotent; returns whether anything visible changed. There is no
    /// rollback if the backing request later fails.
    pub fn mark_read(&mut self, notification_id: &str) -> bool {
        self.locally_read.insert(notification_id.to_string());

        let mut changed = false;
        for item in self.items.iter_mut() {
            if item.id == notification_id && !item.read {
                item.read = true;
                changed = true;
            }
        }
        if changed {
            self.recount();
        }
        changed
    }

    /// Forget everything (logout)
    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
        self.locally_read.clear();
        self.unread = 0;
    }

    fn recount(&mut self) {
        self.unread = self.items.iter().filter(|n| !n.read).count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::portal::NotificationKind;

    fn session() -> SessionContext {
        SessionContext::new("u-1", "amira")
    }

    fn unread(id: &str) -> Notification {
        Notification::new(id, "u-1", NotificationKind::Comment)
    }

    #[test]
    fn test_poll_sets_unread_count() {
        let mut center = NotificationCenter::new();
        let mut read_one = unread("b");
        read_one.read = true;
        center.apply_poll(vec![unread("a"), read_one]);

        assert_eq!(center.items().len(), 2);
        assert_eq!(center.unread_count(), 1);
    }

    #[test]
    fn test_duplicate_push_is_noop() {
        let mut center = NotificationCenter::new();
        center.apply_poll(vec![unread("a")]);
        assert_eq!(center.unread_count(), 1);

        center.apply_push(unread("a"), &session());
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.unread_count(), 1);
    }

    #[test]
    fn test_push_for_other_recipient_is_dropped() {
        let mut center = NotificationCenter::new();
        center.apply_push(
            Notification::new("x", "someone-else", NotificationKind::Mention),
            &session(),
        );
        assert!(center.items().is_empty());
    }

    #[test]
    fn test_push_prepends_new_notification() {
        let mut center = NotificationCenter::new();
        center.apply_poll(vec![unread("a")]);
        center.apply_push(unread("b"), &session());

        assert_eq!(center.items()[0].id, "b");
        assert_eq!(center.unread_count(), 2);
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let mut center = NotificationCenter::new();
        center.apply_poll(vec![unread("a")]);

        assert!(center.mark_read("a"));
        assert_eq!(center.unread_count(), 0);

        // Second invocation: same visible state, nothing changed.
        assert!(!center.mark_read("a"));
        assert_eq!(center.unread_count(), 0);
    }

    #[test]
    fn test_push_racing_a_poll_is_not_dropped() {
        let mut center = NotificationCenter::new();
        center.apply_poll(vec![unread("a")]);

        // A push lands while the next poll response is already in flight;
        // that response predates the push and does not include it.
        center.apply_push(unread("b"), &session());
        center.apply_poll(vec![unread("a")]);

        assert_eq!(center.items().len(), 2);
        assert_eq!(center.items()[0].id, "b");
        assert_eq!(center.unread_count(), 2);
    }

    #[test]
    fn test_lagging_poll_does_not_unread() {
        let mut center = NotificationCenter::new();
        center.apply_poll(vec![unread("a")]);
        center.mark_read("a");

        // Server lag: the next poll still reports "a" as unread.
        center.apply_poll(vec![unread("a"), unread("b")]);
        assert_eq!(center.unread_count(), 1);
        assert!(center.items().iter().find(|n| n.id == "a").unwrap().read);
    }

    #[test]
    fn test_lagging_push_does_not_unread() {
        let mut center = NotificationCenter::new();
        center.mark_read("a");

        center.apply_push(unread("a"), &session());
        assert_eq!(center.unread_count(), 0);
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut center = NotificationCenter::new();
        center.apply_poll(vec![unread("a")]);
        center.mark_read("a");
        center.clear();

        assert!(center.items().is_empty());
        assert_eq!(center.unread_count(), 0);
    }
}
