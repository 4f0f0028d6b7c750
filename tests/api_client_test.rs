//! Integration tests for the portal REST client against a mock server.

use mockito::Server;
use pretty_assertions::assert_eq;

use uniportal::app::{Config, PortalApiClient};
use uniportal::shared::config::AppConfig;
use uniportal::shared::portal::{ReactionAction, SubmitQuizRequest};

fn client_for(server: &Server) -> PortalApiClient {
    let config =
        Config::with_builder(AppConfig::builder().server_url(server.url())).unwrap();
    PortalApiClient::new(config)
}

#[test]
fn fetches_notifications() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/notifications/get/u-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "success": true,
                "notifications": [
                    {
                        "id": "n-1",
                        "recipientId": "u-1",
                        "read": false,
                        "createdAt": "2024-05-01T10:00:00Z",
                        "kind": "comment",
                        "payload": {"postId": "p-9"}
                    }
                ]
            }"#,
        )
        .create();

    let notifications = client_for(&server).get_notifications("u-1").unwrap();
    mock.assert();

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].id, "n-1");
    assert!(!notifications[0].read);
}

#[test]
fn marks_notification_read() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/notifications/markAsRead")
        .match_body(mockito::Matcher::JsonString(
            r#"{"notificationId": "n-1"}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true}"#)
        .create();

    let success = client_for(&server).mark_as_read("n-1").unwrap();
    mock.assert();
    assert!(success);
}

#[test]
fn like_returns_authoritative_snapshot() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/post/likeUnlikePost")
        .match_body(mockito::Matcher::JsonString(
            r#"{"postId": "p-1", "userId": "u-1", "action": "like"}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"post": {"likes": 6, "dislikes": 0, "userLiked": true, "userDisliked": false}}"#)
        .create();

    let snapshot = client_for(&server)
        .like_unlike_post("p-1", "u-1", ReactionAction::Like)
        .unwrap();
    mock.assert();

    assert_eq!(snapshot.likes, 6);
    assert!(snapshot.user_liked);
    assert!(!snapshot.user_disliked);
}

#[test]
fn batch_reaction_fetch_parses_entries() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/post/getPostReactions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "reactions": [
                    {"postId": "p-1", "likes": 5, "dislikes": 1, "userLiked": false, "userDisliked": false},
                    {"postId": "p-2", "likes": 0, "dislikes": 0, "userLiked": false, "userDisliked": false}
                ]
            }"#,
        )
        .create();

    let entries = client_for(&server)
        .get_post_reactions(&["p-1".to_string(), "p-2".to_string()], "u-1")
        .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].post_id, "p-1");
    assert_eq!(entries[0].snapshot.likes, 5);
}

#[test]
fn quiz_submission_round_trip() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/quizzes/submit/q-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "score": 2,
                "total": 3,
                "results": [
                    {"correct": true, "correctChoice": 0},
                    {"correct": true, "correctChoice": 2},
                    {"correct": false, "correctChoice": 1}
                ]
            }"#,
        )
        .create();

    let body = SubmitQuizRequest {
        user_id: "u-1".to_string(),
        answers: vec![Some(0), Some(2), None],
    };
    let response = client_for(&server).submit_quiz("q-1", &body).unwrap();
    mock.assert();

    assert_eq!(response.score, 2);
    assert_eq!(response.total, 3);
    assert_eq!(response.results.len(), 3);
}

#[test]
fn expired_session_maps_to_friendly_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/notifications/get/u-1")
        .with_status(401)
        .with_body("token expired")
        .create();

    let error = client_for(&server).get_notifications("u-1").unwrap_err();
    assert_eq!(error, "Your session is no longer valid");
}

#[test]
fn transport_failure_is_a_network_error() {
    // Nothing listens on this port.
    let config = Config::with_builder(
        AppConfig::builder().server_url("http://127.0.0.1:1".to_string()),
    )
    .unwrap();
    let client = PortalApiClient::new(config);

    let error = client.get_notifications("u-1").unwrap_err();
    assert!(error.starts_with("Network error"), "got: {error}");
}
