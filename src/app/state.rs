//! Central application state shared across views.
//!
//! All component state lives here; the eframe update loop calls
//! [`AppState::on_frame`] once per frame to drain pending channels, run the
//! poll scheduler, dispatch push events, and advance the quiz countdown.
//! Background request threads never touch state directly; they send results
//! over mpsc channels that this pump consumes.

use std::sync::mpsc::{channel, Receiver};
use std::time::{Duration, Instant};

use crate::app::api::PortalApiClient;
use crate::app::config::Config;
use crate::app::notifications::NotificationCenter;
use crate::app::poller::PollScheduler;
use crate::app::push::{PushClient, PushStatus};
use crate::app::quiz::{QuizAttempt, QuizPhase, QuizSubmission};
use crate::app::reactions::{ReactionEvent, ReactionSync, TaggedReactionResult};
use crate::app::rooms::ClubRooms;
use crate::app::search::DebouncedSearch;
use crate::app::types::AppView;
use crate::shared::portal::{
    FeedPost, Notification, PostReactionEntry, Quiz, ReactionAction, SubmitQuizResponse,
};
use crate::shared::{PushEvent, SessionContext, SharedError};

/// Pending API operation result types
pub type PollResult = Result<Vec<Notification>, String>;
pub type FeedResult = Result<Vec<FeedPost>, String>;
pub type ReactionSeedResult = Result<Vec<PostReactionEntry>, String>;
pub type QuizListResult = Result<Vec<Quiz>, String>;
pub type QuizSubmitResult = Result<SubmitQuizResponse, String>;
pub type SendMessageResult = Result<(), String>;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub api: PortalApiClient,
    /// Set at login, cleared at logout; passed to components explicitly
    pub session: Option<SessionContext>,
    pub current_view: AppView,

    /// Login form inputs
    pub user_id_input: String,
    pub username_input: String,
    pub login_error: Option<String>,

    /// Notification list + unread count (poll/push merge)
    pub notifications: NotificationCenter,
    /// Optimistic per-post reaction state
    pub reactions: ReactionSync,
    /// Club rooms and their message history
    pub rooms: ClubRooms,
    /// Quizzes available to the user
    pub quizzes: Vec<Quiz>,
    /// The attempt currently on screen, if any
    pub quiz_attempt: Option<QuizAttempt>,
    /// Grading result of the last submitted attempt
    pub quiz_result: Option<SubmitQuizResponse>,
    /// Feed posts
    pub feed: Vec<FeedPost>,

    /// Notification poll timer; torn down with the push connection
    pub poller: PollScheduler,
    /// Push stream; `None` while logged out
    pub push: Option<PushClient>,
    pub push_status: Option<PushStatus>,

    /// Pending async operation receivers
    pub pending_poll: Option<Receiver<PollResult>>,
    pub pending_feed: Option<Receiver<FeedResult>>,
    pub pending_reaction_seed: Option<Receiver<ReactionSeedResult>>,
    pub pending_quizzes: Option<Receiver<QuizListResult>>,
    pub pending_quiz_submit: Option<Receiver<QuizSubmitResult>>,
    pub pending_send_message: Option<Receiver<SendMessageResult>>,

    /// Notifications panel visibility
    pub show_notifications_panel: bool,
    /// Debounced club room search
    pub club_search: DebouncedSearch,
    /// Club id input for joining a room
    pub join_club_input: String,
    /// Selected club room
    pub selected_club: Option<String>,
    /// Chat message input
    pub message_input: String,
    /// Transient dismissable notice (network or validation failures)
    pub ui_error: Option<String>,

    last_quiz_tick: Option<Instant>,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::new();
        let api = PortalApiClient::new(config.clone());
        let poller = PollScheduler::new(config.poll_interval());
        Self {
            config,
            api,
            session: None,
            current_view: AppView::Auth,
            user_id_input: String::new(),
            username_input: String::new(),
            login_error: None,
            notifications: NotificationCenter::new(),
            reactions: ReactionSync::new(),
            rooms: ClubRooms::new(),
            quizzes: Vec::new(),
            quiz_attempt: None,
            quiz_result: None,
            feed: Vec::new(),
            poller,
            push: None,
            push_status: None,
            pending_poll: None,
            pending_feed: None,
            pending_reaction_seed: None,
            pending_quizzes: None,
            pending_quiz_submit: None,
            pending_send_message: None,
            show_notifications_panel: false,
            club_search: DebouncedSearch::default(),
            join_club_input: String::new(),
            selected_club: None,
            message_input: String::new(),
            ui_error: None,
            last_quiz_tick: None,
        }
    }

    /// Establish the session and bring up the authenticated lifecycle:
    /// poll timer, push connection, initial feed and quiz loads.
    pub fn handle_login(&mut self) {
        if self.user_id_input.trim().is_empty() || self.username_input.trim().is_empty() {
            self.login_error = Some("User id and name are required".to_string());
            return;
        }

        let session = SessionContext::new(self.user_id_input.trim(), self.username_input.trim());
        tracing::info!("[SESSION] login: {}", session.user_id);

        self.poller.start();
        self.push = Some(PushClient::connect(self.config.clone(), &session.user_id));
        self.session = Some(session);
        self.login_error = None;
        self.current_view = AppView::Feed;

        self.load_feed();
        self.load_quizzes();
    }

    /// Tear down the authenticated lifecycle. The poll timer and the push
    /// connection go down together; in-flight request effects are abandoned.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!("[SESSION] logout: {}", session.user_id);
        }

        self.poller.stop();
        if let Some(mut push) = self.push.take() {
            push.shutdown();
        }
        self.push_status = None;

        self.reactions.abandon_all();
        self.notifications.clear();
        self.rooms.clear();
        self.quizzes.clear();
        self.quiz_attempt = None;
        self.quiz_result = None;
        self.feed.clear();

        self.pending_poll = None;
        self.pending_feed = None;
        self.pending_reaction_seed = None;
        self.pending_quizzes = None;
        self.pending_quiz_submit = None;
        self.pending_send_message = None;

        self.show_notifications_panel = false;
        self.club_search.clear();
        self.join_club_input.clear();
        self.selected_club = None;
        self.message_input.clear();
        self.ui_error = None;
        self.last_quiz_tick = None;

        self.user_id_input.clear();
        self.username_input.clear();
        self.current_view = AppView::Auth;
    }

    /// Per-frame pump: timers, push events, pending channels, reconciliation.
    pub fn on_frame(&mut self, now: Instant) {
        if self.session.is_none() {
            return;
        }

        self.drain_push_events();
        self.run_poll_timer(now);
        self.check_pending_operations();
        self.reconcile_reactions();
        self.tick_quiz(now);
        self.club_search.tick(now);
    }

    /// User clicked like/dislike on a post. A second click while a request
    /// is in flight is ignored (busy, not an error).
    pub fn handle_reaction(&mut self, post_id: &str, action: ReactionAction) {
        let Some(session) = self.session.clone() else {
            return;
        };

        let Ok(pending) = self.reactions.begin(post_id, action) else {
            return;
        };

        let api = self.api.clone();
        let post_id = post_id.to_string();
        let seq = pending.seq;
        let sender = pending.sender;
        std::thread::spawn(move || {
            let result = api.like_unlike_post(&post_id, &session.user_id, action);
            let _ = sender.send(TaggedReactionResult { seq, result });
        });
    }

    /// Optimistically mark a notification read and fire the request.
    /// No rollback on failure (the next poll converges).
    pub fn handle_mark_read(&mut self, notification_id: &str) {
        if notification_id.is_empty() {
            return;
        }
        self.notifications.mark_read(notification_id);

        let api = self.api.clone();
        let id = notification_id.to_string();
        std::thread::spawn(move || {
            if let Err(e) = api.mark_as_read(&id) {
                tracing::warn!("[NOTIFY] markAsRead failed for {id}: {e}");
            }
        });
    }

    /// Join a club room and select it
    pub fn handle_join_club(&mut self) {
        let club_id = self.join_club_input.trim().to_string();
        if club_id.is_empty() {
            self.ui_error =
                Some(SharedError::validation("club_id", "Club id cannot be empty").to_string());
            return;
        }
        self.rooms.join(&club_id);
        self.selected_club = Some(club_id);
        self.join_club_input.clear();
    }

    pub fn handle_leave_club(&mut self, club_id: &str) {
        self.rooms.leave(club_id);
        if self.selected_club.as_deref() == Some(club_id) {
            self.selected_club = None;
        }
    }

    /// Send a chat message to the selected club. The message shows up when
    /// the server's push echo arrives.
    pub fn handle_send_message(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };
        let Some(club_id) = self.selected_club.clone() else {
            return;
        };
        let content = self.message_input.trim().to_string();
        if content.is_empty() {
            self.ui_error =
                Some(SharedError::validation("content", "Message content cannot be empty").to_string());
            return;
        }
        self.message_input.clear();

        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api.send_club_message(&club_id, &session.user_id, &content);
            let _ = tx.send(result);
        });
        self.pending_send_message = Some(rx);
    }

    /// Begin an attempt at a quiz
    pub fn handle_start_quiz(&mut self, quiz: Quiz) {
        let mut attempt = QuizAttempt::new(quiz);
        if attempt.start().is_ok() {
            self.quiz_attempt = Some(attempt);
            self.quiz_result = None;
            self.last_quiz_tick = Some(Instant::now());
        }
    }

    /// Submit the current attempt explicitly
    pub fn handle_submit_quiz(&mut self) {
        let Some(attempt) = self.quiz_attempt.as_mut() else {
            return;
        };
        if let Ok(submission) = attempt.submit() {
            self.dispatch_quiz_submission(submission);
        }
    }

    /// Joined club rooms matching the settled search query
    pub fn filtered_clubs(&self) -> Vec<&str> {
        let query = self.club_search.query().to_lowercase();
        let mut clubs: Vec<&str> = self
            .rooms
            .joined_rooms()
            .filter(|c| query.is_empty() || c.to_lowercase().contains(&query))
            .collect();
        clubs.sort_unstable();
        clubs
    }

    fn load_feed(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };
        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api.get_feed(&session.user_id);
            let _ = tx.send(result);
        });
        self.pending_feed = Some(rx);
    }

    fn load_quizzes(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };
        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api.get_quizzes(&session.user_id);
            let _ = tx.send(result);
        });
        self.pending_quizzes = Some(rx);
    }

    fn seed_reactions(&mut self, post_ids: Vec<String>) {
        let Some(session) = self.session.clone() else {
            return;
        };
        if post_ids.is_empty() {
            return;
        }
        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api.get_post_reactions(&post_ids, &session.user_id);
            let _ = tx.send(result);
        });
        self.pending_reaction_seed = Some(rx);
    }

    fn dispatch_quiz_submission(&mut self, submission: QuizSubmission) {
        let Some(session) = self.session.clone() else {
            return;
        };
        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let quiz_id = submission.quiz_id.clone();
            let body = submission.into_request(&session.user_id);
            let result = api.submit_quiz(&quiz_id, &body);
            let _ = tx.send(result);
        });
        self.pending_quiz_submit = Some(rx);
    }

    fn drain_push_events(&mut self) {
        let Some(push) = self.push.as_ref() else {
            return;
        };
        if let Some(status) = push.poll_status() {
            self.push_status = Some(status);
        }

        let events = push.poll_events();
        let Some(session) = self.session.clone() else {
            return;
        };
        for event in events {
            match event {
                PushEvent::Notification(notification) => {
                    self.notifications.apply_push(notification, &session);
                }
                PushEvent::ReactionUpdate {
                    post_id,
                    likes,
                    dislikes,
                } => {
                    self.reactions.apply_push(&post_id, likes, dislikes);
                }
                PushEvent::ClubMessage(message) => {
                    self.rooms.apply_push(message);
                }
            }
        }
    }

    fn run_poll_timer(&mut self, now: Instant) {
        if !self.poller.should_poll(now) || self.pending_poll.is_some() {
            return;
        }
        let Some(session) = self.session.clone() else {
            return;
        };

        let api = self.api.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api.get_notifications(&session.user_id);
            let _ = tx.send(result);
        });
        self.pending_poll = Some(rx);
        self.poller.record_poll(now);
    }

    /// Check for pending async operation results
    fn check_pending_operations(&mut self) {
        if let Some(ref rx) = self.pending_poll {
            if let Ok(result) = rx.try_recv() {
                self.pending_poll = None;
                match result {
                    Ok(batch) => self.notifications.apply_poll(batch),
                    Err(e) => {
                        tracing::warn!("[NOTIFY] poll failed: {e}");
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_feed {
            if let Ok(result) = rx.try_recv() {
                self.pending_feed = None;
                match result {
                    Ok(posts) => {
                        let post_ids: Vec<String> = posts.iter().map(|p| p.id.clone()).collect();
                        self.feed = posts;
                        self.seed_reactions(post_ids);
                    }
                    Err(e) => {
                        self.ui_error = Some(format!("Failed to load feed: {}", e));
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_reaction_seed {
            if let Ok(result) = rx.try_recv() {
                self.pending_reaction_seed = None;
                match result {
                    Ok(entries) => {
                        for entry in entries {
                            self.reactions.seed(&entry.post_id, entry.snapshot);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("[REACT] batch snapshot fetch failed: {e}");
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_quizzes {
            if let Ok(result) = rx.try_recv() {
                self.pending_quizzes = None;
                match result {
                    Ok(quizzes) => self.quizzes = quizzes,
                    Err(e) => {
                        self.ui_error = Some(format!("Failed to load quizzes: {}", e));
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_quiz_submit {
            if let Ok(result) = rx.try_recv() {
                self.pending_quiz_submit = None;
                match result {
                    Ok(response) => self.quiz_result = Some(response),
                    Err(e) => {
                        self.ui_error = Some(format!("Quiz submission failed: {}", e));
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_send_message {
            if let Ok(result) = rx.try_recv() {
                self.pending_send_message = None;
                if let Err(e) = result {
                    self.ui_error = Some(format!("Failed to send message: {}", e));
                }
            }
        }
    }

    fn reconcile_reactions(&mut self) {
        for event in self.reactions.pump() {
            if let ReactionEvent::RolledBack { post_id, error } = event {
                self.ui_error = Some(format!("Reaction on {} failed: {}", post_id, error));
            }
        }
    }

    fn tick_quiz(&mut self, now: Instant) {
        let Some(attempt) = self.quiz_attempt.as_mut() else {
            return;
        };
        if attempt.phase() != QuizPhase::InProgress {
            self.last_quiz_tick = None;
            return;
        }

        let last = self.last_quiz_tick.get_or_insert(now);
        let mut submission = None;
        while now.duration_since(*last) >= Duration::from_secs(1) {
            *last += Duration::from_secs(1);
            if let Some(s) = attempt.tick() {
                submission = Some(s);
                break;
            }
        }

        if let Some(submission) = submission {
            self.dispatch_quiz_submission(submission);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
