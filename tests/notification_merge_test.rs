//! Integration and property tests for the notification poll/push merge:
//! at-least-once delivery, exactly-once effect.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use uniportal::app::NotificationCenter;
use uniportal::shared::portal::{Notification, NotificationKind};
use uniportal::shared::SessionContext;

fn session() -> SessionContext {
    SessionContext::new("u-1", "amira")
}

fn notification(id: &str) -> Notification {
    Notification::new(id, "u-1", NotificationKind::Comment)
}

#[test]
fn duplicate_push_after_poll_has_no_effect() {
    // Poll returns [{id: "a", read: false}]: unread count = 1.
    let mut center = NotificationCenter::new();
    center.apply_poll(vec![notification("a")]);
    assert_eq!(center.unread_count(), 1);

    // Push delivers {id: "a", read: false} again: list still length 1,
    // unread count still 1.
    center.apply_push(notification("a"), &session());
    assert_eq!(center.items().len(), 1);
    assert_eq!(center.unread_count(), 1);
}

#[test]
fn push_then_poll_converges_without_duplicates() {
    let mut center = NotificationCenter::new();
    center.apply_push(notification("a"), &session());
    assert_eq!(center.items().len(), 1);

    // The next poll includes the pushed entry plus an older one.
    center.apply_poll(vec![notification("a"), notification("b")]);
    assert_eq!(center.items().len(), 2);
    assert_eq!(center.unread_count(), 2);
}

#[test]
fn mark_read_twice_has_the_same_visible_state_as_once() {
    let mut center = NotificationCenter::new();
    center.apply_poll(vec![notification("a"), notification("b")]);

    center.mark_read("a");
    let after_once: Vec<(String, bool)> = center
        .items()
        .iter()
        .map(|n| (n.id.clone(), n.read))
        .collect();
    let unread_once = center.unread_count();

    center.mark_read("a");
    let after_twice: Vec<(String, bool)> = center
        .items()
        .iter()
        .map(|n| (n.id.clone(), n.read))
        .collect();

    assert_eq!(after_once, after_twice);
    assert_eq!(unread_once, center.unread_count());
}

proptest! {
    /// Any interleaving of polls and pushes over a small id space keeps the
    /// list free of duplicate ids.
    #[test]
    fn merged_list_ids_stay_unique(ops in prop::collection::vec((0u8..2, 0u8..6), 1..40)) {
        let mut center = NotificationCenter::new();
        let session = session();
        let mut polled: Vec<String> = Vec::new();

        for (op, id) in ops {
            let id = format!("n-{}", id);
            match op {
                0 => {
                    center.apply_push(notification(&id), &session);
                }
                _ => {
                    if !polled.contains(&id) {
                        polled.push(id.clone());
                    }
                    let batch: Vec<Notification> =
                        polled.iter().map(|i| notification(i)).collect();
                    center.apply_poll(batch);
                }
            }

            let mut ids: Vec<&str> = center.items().iter().map(|n| n.id.as_str()).collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(before, ids.len());
        }
    }

    /// Unread count always equals the number of entries with read == false.
    #[test]
    fn unread_count_matches_list(ids in prop::collection::vec(0u8..6, 1..20), reads in prop::collection::vec(0u8..6, 0..10)) {
        let mut center = NotificationCenter::new();
        let session = session();

        for id in ids {
            center.apply_push(notification(&format!("n-{}", id)), &session);
        }
        for id in reads {
            center.mark_read(&format!("n-{}", id));
        }

        let expected = center.items().iter().filter(|n| !n.read).count();
        prop_assert_eq!(center.unread_count(), expected);
    }
}
