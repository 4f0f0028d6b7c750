//! Reaction Synchronizer
//!
//! Reconciles optimistic like/dislike state with server responses and
//! push-delivered updates from other users.
//!
//! A click flips the displayed snapshot immediately and opens a channel for
//! the backing request; the UI thread drains resolved requests each frame via
//! [`ReactionSync::pump`]. The server response is adopted verbatim on
//! success; on failure the display rolls back to the last server-acknowledged
//! snapshot. At most one request per post may be outstanding; a second click
//! while one is in flight is reported as busy, not an error.
//!
//! Requests carry a monotonic sequence number. A response whose sequence is
//! not newer than the last adopted one is discarded, so a slow response can
//! never overwrite state that a newer request already settled. Pushed count
//! updates that arrive while a request is in flight are deferred until the
//! request resolves, so a stale push cannot clobber the authoritative echo.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::shared::portal::{ReactionAction, ReactionSnapshot};

/// Result type carried over a reaction request channel
pub type ReactionResult = Result<ReactionSnapshot, String>;

/// Signal that a reaction request is already outstanding for the post.
/// Callers ignore the click; this is not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionBusy;

/// Handle for an accepted reaction: the caller's request thread fulfils the
/// sender with the server's response (or an error message).
#[derive(Debug)]
pub struct PendingReaction {
    /// Sequence number of this request
    pub seq: u64,
    /// The action that was applied optimistically
    pub action: ReactionAction,
    /// The snapshot now displayed (the optimistic guess)
    pub optimistic: ReactionSnapshot,
    /// Channel the request thread sends the outcome into
    pub sender: Sender<TaggedReactionResult>,
}

impl PartialEq for PendingReaction {
    fn eq(&self, other: &Self) -> bool {
        // `mpsc::Sender` has no equality; compare the remaining fields.
        self.seq == other.seq && self.action == other.action && self.optimistic == other.optimistic
    }
}

/// A reaction outcome tagged with its request sequence number
#[derive(Debug)]
pub struct TaggedReactionResult {
    pub seq: u64,
    pub result: ReactionResult,
}

/// What the pump observed while draining resolved requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionEvent {
    /// The server confirmed a reaction; its snapshot was adopted
    Settled { post_id: String },
    /// The request failed; the optimistic guess was rolled back
    RolledBack { post_id: String, error: String },
}

/// Pushed counts from another user's reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PushedCounts {
    likes: u64,
    dislikes: u64,
}

struct InFlightReaction {
    seq: u64,
    rx: Receiver<TaggedReactionResult>,
}

struct PostReactions {
    /// Snapshot currently displayed
    shown: ReactionSnapshot,
    /// Last server-acknowledged snapshot; rollback target
    committed: ReactionSnapshot,
    in_flight: Option<InFlightReaction>,
    /// Push received while a request was in flight; latest wins
    deferred_push: Option<PushedCounts>,
    /// Highest sequence number whose response was adopted
    last_adopted_seq: u64,
}

impl PostReactions {
    fn new(snapshot: ReactionSnapshot) -> Self {
        Self {
            shown: snapshot,
            committed: snapshot,
            in_flight: None,
            deferred_push: None,
            last_adopted_seq: 0,
        }
    }

    fn apply_counts(&mut self, counts: PushedCounts) {
        // Another user's reaction never changes this user's own flags.
        self.shown.likes = counts.likes;
        self.shown.dislikes = counts.dislikes;
        self.committed.likes = counts.likes;
        self.committed.dislikes = counts.dislikes;
    }
}

/// Per-post optimistic reaction state for the whole feed
pub struct ReactionSync {
    posts: HashMap<String, PostReactions>,
    next_seq: u64,
}

impl Default for ReactionSync {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactionSync {
    pub fn new() -> Self {
        Self {
            posts: HashMap::new(),
            next_seq: 1,
        }
    }

    /// Adopt a batch-fetched snapshot for a post.
    ///
    /// While a request is in flight the fetched counts are deferred like a
    /// push, so a refetch cannot clobber the optimistic guess.
    pub fn seed(&mut self, post_id: &str, snapshot: ReactionSnapshot) {
        match self.posts.get_mut(post_id) {
            Some(post) if post.in_flight.is_some() => {
                post.deferred_push = Some(PushedCounts {
                    likes: snapshot.likes,
                    dislikes: snapshot.dislikes,
                });
            }
            Some(post) => {
                post.shown = snapshot;
                post.committed = snapshot;
            }
            None => {
                self.posts.insert(post_id.to_string(), PostReactions::new(snapshot));
            }
        }
    }

    /// The snapshot currently displayed for a post
    pub fn snapshot(&self, post_id: &str) -> Option<ReactionSnapshot> {
        self.posts.get(post_id).map(|p| p.shown)
    }

    /// Whether a request is outstanding for a post
    pub fn is_busy(&self, post_id: &str) -> bool {
        self.posts
            .get(post_id)
            .map(|p| p.in_flight.is_some())
            .unwrap_or(false)
    }

    /// Begin a user-initiated reaction.
    ///
    /// Flips the displayed snapshot optimistically and returns the channel
    /// the request thread must fulfil. Returns `ReactionBusy` if a request is
    /// already in flight for this post.
    pub fn begin(
        &mut self,
        post_id: &str,
        action: ReactionAction,
    ) -> Result<PendingReaction, ReactionBusy> {
        let post = self
            .posts
            .entry(post_id.to_string())
            .or_insert_with(|| PostReactions::new(ReactionSnapshot::default()));

        if post.in_flight.is_some() {
            tracing::debug!("[REACT] ignoring click on {post_id}: request in flight");
            return Err(ReactionBusy);
        }

        let seq = self.next_seq;
        self.next_seq += 1;

        // The pre-click display is the rollback target.
        post.committed = post.shown;
        post.shown = post.shown.applied(action);

        let (tx, rx) = channel();
        post.in_flight = Some(InFlightReaction { seq, rx });

        tracing::debug!("[REACT] begin seq={seq} action={action:?} post={post_id}");
        Ok(PendingReaction {
            seq,
            action,
            optimistic: post.shown,
            sender: tx,
        })
    }

    /// Merge a push-delivered count update from another user.
    ///
    /// Applied immediately when the post is idle; deferred until the
    /// in-flight request resolves otherwise (latest push wins).
    pub fn apply_push(&mut self, post_id: &str, likes: u64, dislikes: u64) {
        let counts = PushedCounts { likes, dislikes };
        match self.posts.get_mut(post_id) {
            Some(post) if post.in_flight.is_some() => {
                post.deferred_push = Some(counts);
            }
            Some(post) => post.apply_counts(counts),
            None => {
                let mut post = PostReactions::new(ReactionSnapshot::default());
                post.apply_counts(counts);
                self.posts.insert(post_id.to_string(), post);
            }
        }
    }

    /// Drain resolved requests and reconcile.
    ///
    /// Call once per frame from the UI thread.
    pub fn pump(&mut self) -> Vec<ReactionEvent> {
        let mut events = Vec::new();

        for (post_id, post) in self.posts.iter_mut() {
            let Some(in_flight) = post.in_flight.as_ref() else {
                continue;
            };
            let Ok(tagged) = in_flight.rx.try_recv() else {
                continue;
            };

            let expected_seq = in_flight.seq;
            if tagged.seq != expected_seq || tagged.seq <= post.last_adopted_seq {
                // Superseded or abandoned request; keep waiting for the
                // response that matches the current in-flight seq.
                tracing::warn!(
                    "[REACT] discarding stale response seq={} (expected {}) for {post_id}",
                    tagged.seq,
                    expected_seq
                );
                continue;
            }
            post.in_flight = None;

            match tagged.result {
                Ok(server) => {
                    // Server is ground truth; the optimistic guess is dropped.
                    post.shown = server;
                    post.committed = server;
                    post.last_adopted_seq = tagged.seq;
                    events.push(ReactionEvent::Settled {
                        post_id: post_id.clone(),
                    });
                }
                Err(error) => {
                    post.shown = post.committed;
                    tracing::warn!("[REACT] rolled back {post_id}: {error}");
                    events.push(ReactionEvent::RolledBack {
                        post_id: post_id.clone(),
                        error,
                    });
                }
            }

            // A push that arrived mid-flight is applied only now.
            if let Some(counts) = post.deferred_push.take() {
                post.apply_counts(counts);
            }
        }

        events
    }

    /// Abandon the in-flight request for one post; its late response is ignored.
    pub fn abandon(&mut self, post_id: &str) {
        if let Some(post) = self.posts.get_mut(post_id) {
            post.in_flight = None;
            post.deferred_push = None;
            post.shown = post.committed;
        }
    }

    /// Abandon all in-flight requests (view unmount / logout)
    pub fn abandon_all(&mut self) {
        for (post_id, post) in self.posts.iter_mut() {
            if post.in_flight.take().is_some() {
                tracing::debug!("[REACT] abandoning in-flight request for {post_id}");
                post.deferred_push = None;
                post.shown = post.committed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(likes: u64, dislikes: u64, user_liked: bool, user_disliked: bool) -> ReactionSnapshot {
        ReactionSnapshot {
            likes,
            dislikes,
            user_liked,
            user_disliked,
        }
    }

    fn resolve(pending: &PendingReaction, result: ReactionResult) {
        pending
            .sender
            .send(TaggedReactionResult {
                seq: pending.seq,
                result,
            })
            .unwrap();
    }

    #[test]
    fn test_optimistic_flip_is_immediate() {
        let mut sync = ReactionSync::new();
        sync.seed("p1", snap(5, 0, false, false));

        let pending = sync.begin("p1", ReactionAction::Like).unwrap();
        assert_eq!(pending.optimistic, snap(6, 0, true, false));
        assert_eq!(sync.snapshot("p1").unwrap(), snap(6, 0, true, false));
    }

    #[test]
    fn test_second_click_while_in_flight_is_busy() {
        let mut sync = ReactionSync::new();
        sync.seed("p1", snap(5, 0, false, false));

        let _pending = sync.begin("p1", ReactionAction::Like).unwrap();
        assert_eq!(sync.begin("p1", ReactionAction::Like), Err(ReactionBusy));
        assert!(sync.is_busy("p1"));
    }

    #[test]
    fn test_server_response_adopted_verbatim() {
        let mut sync = ReactionSync::new();
        sync.seed("p1", snap(5, 0, false, false));

        let pending = sync.begin("p1", ReactionAction::Like).unwrap();
        // Server says someone else also liked in the meantime.
        resolve(&pending, Ok(snap(7, 0, true, false)));

        let events = sync.pump();
        assert_eq!(
            events,
            vec![ReactionEvent::Settled {
                post_id: "p1".to_string()
            }]
        );
        assert_eq!(sync.snapshot("p1").unwrap(), snap(7, 0, true, false));
        assert!(!sync.is_busy("p1"));
    }

    #[test]
    fn test_failure_rolls_back_to_pre_click_state() {
        let mut sync = ReactionSync::new();
        sync.seed("p1", snap(5, 2, false, true));

        let pending = sync.begin("p1", ReactionAction::Like).unwrap();
        assert_eq!(sync.snapshot("p1").unwrap(), snap(6, 1, true, false));

        resolve(&pending, Err("Network error".to_string()));
        let events = sync.pump();
        assert_eq!(
            events,
            vec![ReactionEvent::RolledBack {
                post_id: "p1".to_string(),
                error: "Network error".to_string()
            }]
        );
        assert_eq!(sync.snapshot("p1").unwrap(), snap(5, 2, false, true));
    }

    #[test]
    fn test_push_during_flight_is_deferred() {
        let mut sync = ReactionSync::new();
        sync.seed("p1", snap(5, 0, false, false));

        let pending = sync.begin("p1", ReactionAction::Like).unwrap();
        sync.apply_push("p1", 9, 3);
        // Deferred: the optimistic guess stays on screen.
        assert_eq!(sync.snapshot("p1").unwrap(), snap(6, 0, true, false));

        resolve(&pending, Ok(snap(6, 0, true, false)));
        sync.pump();
        // After settling, the deferred push counts land; own flags survive.
        assert_eq!(sync.snapshot("p1").unwrap(), snap(9, 3, true, false));
    }

    #[test]
    fn test_push_when_idle_applies_immediately_preserving_flags() {
        let mut sync = ReactionSync::new();
        sync.seed("p1", snap(6, 0, true, false));

        sync.apply_push("p1", 7, 2);
        assert_eq!(sync.snapshot("p1").unwrap(), snap(7, 2, true, false));
    }

    #[test]
    fn test_stale_response_after_abandon_is_ignored() {
        let mut sync = ReactionSync::new();
        sync.seed("p1", snap(5, 0, false, false));

        let pending = sync.begin("p1", ReactionAction::Like).unwrap();
        sync.abandon_all();
        assert_eq!(sync.snapshot("p1").unwrap(), snap(5, 0, false, false));

        // Late response: the receiver is gone, the send just fails.
        let send_result = pending.sender.send(TaggedReactionResult {
            seq: pending.seq,
            result: Ok(snap(6, 0, true, false)),
        });
        assert!(send_result.is_err());

        assert!(sync.pump().is_empty());
        assert_eq!(sync.snapshot("p1").unwrap(), snap(5, 0, false, false));
    }

    #[test]
    fn test_newer_request_wins_over_older_response() {
        let mut sync = ReactionSync::new();
        sync.seed("p1", snap(5, 0, false, false));

        // First request abandoned (e.g. timed out client-side), second issued.
        let first = sync.begin("p1", ReactionAction::Like).unwrap();
        sync.abandon("p1");
        let second = sync.begin("p1", ReactionAction::Like).unwrap();
        assert!(second.seq > first.seq);

        resolve(&second, Ok(snap(6, 0, true, false)));
        sync.pump();
        assert_eq!(sync.snapshot("p1").unwrap(), snap(6, 0, true, false));

        // A response tagged with the old sequence must not be adopted even if
        // it somehow reaches a live channel.
        let third = sync.begin("p1", ReactionAction::Dislike).unwrap();
        third
            .sender
            .send(TaggedReactionResult {
                seq: first.seq,
                result: Ok(snap(999, 0, false, false)),
            })
            .unwrap();
        assert!(sync.pump().is_empty());
        assert_ne!(sync.snapshot("p1").unwrap().likes, 999);
    }

    #[test]
    fn test_seed_during_flight_is_deferred() {
        let mut sync = ReactionSync::new();
        sync.seed("p1", snap(5, 0, false, false));

        let pending = sync.begin("p1", ReactionAction::Like).unwrap();
        sync.seed("p1", snap(5, 1, false, false));
        assert_eq!(sync.snapshot("p1").unwrap(), snap(6, 0, true, false));

        resolve(&pending, Ok(snap(6, 0, true, false)));
        sync.pump();
        assert_eq!(sync.snapshot("p1").unwrap(), snap(5, 1, true, false));
    }
}
