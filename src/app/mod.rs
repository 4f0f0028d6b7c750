//! Desktop App Module
//!
//! Native desktop shell (egui/eframe) plus the client-side state components
//! it drives: the reaction synchronizer, the notification poll/push merge,
//! club chat rooms, and the quiz countdown state machine.
//!
//! # Module Structure
//!
//! ```text
//! app/
//! ├── mod.rs           - Module exports
//! ├── main.rs          - Binary entry point
//! ├── config.rs        - Configuration wrapper (server URL, poll interval)
//! ├── types.rs         - View enum
//! ├── api.rs           - Portal REST client
//! ├── push.rs          - Push stream client (subscription thread)
//! ├── reactions.rs     - Optimistic reaction synchronizer
//! ├── notifications.rs - Notification center (poll/push merge)
//! ├── poller.rs        - Fixed-interval poll scheduler
//! ├── quiz.rs          - Quiz attempt state machine
//! ├── rooms.rs         - Club chat rooms
//! ├── search.rs        - Debounced search input
//! ├── state.rs         - Central AppState and per-frame pump
//! ├── theme.rs         - Color constants
//! └── views/           - egui views
//! ```

pub mod api;
pub mod config;
pub mod notifications;
pub mod poller;
pub mod push;
pub mod quiz;
pub mod reactions;
pub mod rooms;
pub mod search;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use api::PortalApiClient;
pub use config::Config;
pub use notifications::NotificationCenter;
pub use poller::PollScheduler;
pub use push::{PushClient, PushStatus};
pub use quiz::{QuizAttempt, QuizPhase, QuizStateError, QuizSubmission};
pub use reactions::{
    PendingReaction, ReactionBusy, ReactionEvent, ReactionSync, TaggedReactionResult,
};
pub use rooms::ClubRooms;
pub use search::DebouncedSearch;
pub use state::AppState;
pub use types::AppView;
