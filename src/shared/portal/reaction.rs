//! Reaction Data Structures
//!
//! The reaction snapshot is a derived view of a post's like/dislike state for
//! the current user. The authoritative value lives on the server; the client
//! shows an optimistic guess until the server echoes the real one back.

use serde::{Deserialize, Serialize};

/// A user-initiated reaction on a post
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReactionAction {
    Like,
    Dislike,
}

/// Per-post reaction state as seen by one user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReactionSnapshot {
    pub likes: u64,
    pub dislikes: u64,
    pub user_liked: bool,
    pub user_disliked: bool,
}

impl ReactionSnapshot {
    /// The snapshot that results from applying `action` optimistically.
    ///
    /// Like and dislike toggle membership and are mutually exclusive: liking
    /// an already-liked post removes the like, liking a disliked post moves
    /// the reaction over.
    pub fn applied(&self, action: ReactionAction) -> Self {
        let mut next = *self;
        match action {
            ReactionAction::Like => {
                if next.user_liked {
                    next.user_liked = false;
                    next.likes = next.likes.saturating_sub(1);
                } else {
                    next.user_liked = true;
                    next.likes += 1;
                    if next.user_disliked {
                        next.user_disliked = false;
                        next.dislikes = next.dislikes.saturating_sub(1);
                    }
                }
            }
            ReactionAction::Dislike => {
                if next.user_disliked {
                    next.user_disliked = false;
                    next.dislikes = next.dislikes.saturating_sub(1);
                } else {
                    next.user_disliked = true;
                    next.dislikes += 1;
                    if next.user_liked {
                        next.user_liked = false;
                        next.likes = next.likes.saturating_sub(1);
                    }
                }
            }
        }
        next
    }
}

/// Request body for `POST /post/likeUnlikePost`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeUnlikeRequest {
    pub post_id: String,
    pub user_id: String,
    pub action: ReactionAction,
}

/// Response for `POST /post/likeUnlikePost`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeUnlikeResponse {
    pub post: ReactionSnapshot,
}

/// Request body for `POST /post/getPostReactions`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPostReactionsRequest {
    pub post_ids: Vec<String>,
    pub user_id: String,
}

/// One entry of the batch reaction response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostReactionEntry {
    pub post_id: String,
    #[serde(flatten)]
    pub snapshot: ReactionSnapshot,
}

/// Response for `POST /post/getPostReactions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPostReactionsResponse {
    pub reactions: Vec<PostReactionEntry>,
}
