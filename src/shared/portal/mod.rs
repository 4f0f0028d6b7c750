//! Portal Domain Types
//!
//! Wire types shared between the REST client, the push client, and the
//! state components.

pub mod message;
pub mod notification;
pub mod post;
pub mod quiz;
pub mod reaction;

pub use message::{ClubMessage, SendClubMessageRequest, SendClubMessageResponse};
pub use notification::{
    ListNotificationsResponse, MarkAsReadRequest, MarkAsReadResponse, Notification,
    NotificationKind,
};
pub use post::{FeedPost, FeedResponse};
pub use quiz::{
    ListQuizzesResponse, QuestionResult, Quiz, QuizQuestion, SubmitQuizRequest, SubmitQuizResponse,
};
pub use reaction::{
    GetPostReactionsRequest, GetPostReactionsResponse, LikeUnlikeRequest, LikeUnlikeResponse,
    PostReactionEntry, ReactionAction, ReactionSnapshot,
};
