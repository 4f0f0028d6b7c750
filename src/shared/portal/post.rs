//! Feed Post Data Structures
//!
//! The feed itself is page glue; only the id matters to the reaction
//! synchronizer. Kept minimal.

use serde::{Deserialize, Serialize};

/// A post in the social feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedPost {
    /// Unique post id
    pub id: String,
    /// Author display name
    pub author: String,
    /// Post text
    pub content: String,
    /// When the post was created (RFC3339)
    pub created_at: String,
}

/// Response for `GET /post/feed/{userId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub success: bool,
    pub posts: Vec<FeedPost>,
}
