//! Portal REST API Client
//!
//! Thin client for the backend's REST contracts. Each call drives the async
//! request to completion on its own runtime, so callers on background threads
//! stay plain blocking code. Errors are human-friendly strings the UI can
//! show in a transient notice.

use reqwest::Client;
use tokio::runtime::Runtime;

use crate::app::config::Config;
use crate::shared::SharedError;
use crate::shared::portal::{
    FeedPost, FeedResponse, GetPostReactionsRequest, GetPostReactionsResponse, LikeUnlikeRequest,
    LikeUnlikeResponse, ListNotificationsResponse, ListQuizzesResponse, MarkAsReadRequest,
    MarkAsReadResponse, Notification, PostReactionEntry, Quiz, ReactionAction, ReactionSnapshot,
    SendClubMessageRequest, SendClubMessageResponse, SubmitQuizRequest, SubmitQuizResponse,
};

/// Portal API client
#[derive(Debug, Clone)]
pub struct PortalApiClient {
    config: Config,
    client: Client,
}

impl PortalApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetch the full notification list for a user
    pub fn get_notifications(&self, user_id: &str) -> Result<Vec<Notification>, String> {
        let url = self
            .config
            .api_url(&format!("/notifications/get/{}", user_id));
        let response: ListNotificationsResponse = self.get_json(&url)?;
        if !response.success {
            return Err("Server rejected the notification fetch".to_string());
        }
        Ok(response.notifications)
    }

    /// Mark one notification as read
    pub fn mark_as_read(&self, notification_id: &str) -> Result<bool, String> {
        let url = self.config.api_url("/notifications/markAsRead");
        let body = MarkAsReadRequest {
            notification_id: notification_id.to_string(),
        };
        let response: MarkAsReadResponse = self.post_json(&url, &body)?;
        Ok(response.success)
    }

    /// Toggle a like/dislike; returns the authoritative snapshot
    pub fn like_unlike_post(
        &self,
        post_id: &str,
        user_id: &str,
        action: ReactionAction,
    ) -> Result<ReactionSnapshot, String> {
        let url = self.config.api_url("/post/likeUnlikePost");
        let body = LikeUnlikeRequest {
            post_id: post_id.to_string(),
            user_id: user_id.to_string(),
            action,
        };
        let response: LikeUnlikeResponse = self.post_json(&url, &body)?;
        Ok(response.post)
    }

    /// Fetch reaction snapshots for a batch of posts
    pub fn get_post_reactions(
        &self,
        post_ids: &[String],
        user_id: &str,
    ) -> Result<Vec<PostReactionEntry>, String> {
        let url = self.config.api_url("/post/getPostReactions");
        let body = GetPostReactionsRequest {
            post_ids: post_ids.to_vec(),
            user_id: user_id.to_string(),
        };
        let response: GetPostReactionsResponse = self.post_json(&url, &body)?;
        Ok(response.reactions)
    }

    /// Fetch the user's feed
    pub fn get_feed(&self, user_id: &str) -> Result<Vec<FeedPost>, String> {
        let url = self.config.api_url(&format!("/post/feed/{}", user_id));
        let response: FeedResponse = self.get_json(&url)?;
        if !response.success {
            return Err("Server rejected the feed fetch".to_string());
        }
        Ok(response.posts)
    }

    /// Send a club chat message
    pub fn send_club_message(
        &self,
        club_id: &str,
        user_id: &str,
        content: &str,
    ) -> Result<(), String> {
        let url = self.config.api_url("/clubs/sendMessage");
        let body = SendClubMessageRequest {
            club_id: club_id.to_string(),
            user_id: user_id.to_string(),
            content: content.to_string(),
        };
        let response: SendClubMessageResponse = self.post_json(&url, &body)?;
        if !response.success {
            return Err(response
                .error
                .unwrap_or_else(|| "Server rejected the message".to_string()));
        }
        Ok(())
    }

    /// Fetch the quizzes available to a user
    pub fn get_quizzes(&self, user_id: &str) -> Result<Vec<Quiz>, String> {
        let url = self.config.api_url(&format!("/quizzes/get/{}", user_id));
        let response: ListQuizzesResponse = self.get_json(&url)?;
        if !response.success {
            return Err("Server rejected the quiz fetch".to_string());
        }
        Ok(response.quizzes)
    }

    /// Submit a quiz attempt; returns the grading result
    pub fn submit_quiz(
        &self,
        quiz_id: &str,
        body: &SubmitQuizRequest,
    ) -> Result<SubmitQuizResponse, String> {
        let url = self.config.api_url(&format!("/quizzes/submit/{}", quiz_id));
        self.post_json(&url, body)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, String> {
        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                return Err(friendly_status_error(response).await);
            }

            response
                .json::<T>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }

    fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, String> {
        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = self
                .client
                .post(url)
                .header("Content-Type", "application/json")
                .json(body)
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                return Err(friendly_status_error(response).await);
            }

            response
                .json::<T>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }
}

async fn friendly_status_error(response: reqwest::Response) -> String {
    let status = response.status();
    let error_text = response.text().await.unwrap_or_else(|_| status.to_string());

    match status.as_u16() {
        401 | 403 => SharedError::session("Your session is no longer valid").to_string(),
        404 => "Not found".to_string(),
        _ => format!("Request failed: {} - {}", status, error_text),
    }
}
