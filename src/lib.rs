//! UniPortal - Main Library
//!
//! Client-side state core of a university portal application: a native
//! desktop shell over a REST backend, with live updates delivered over a
//! push stream.
//!
//! # Overview
//!
//! The library provides the recurring non-trivial client behavior as reusable
//! components:
//!
//! - Optimistic reaction synchronization with server reconciliation
//! - Notification poll/push merge with id-based deduplication
//! - A quiz countdown state machine with exactly-once auto-submission
//! - Club chat rooms fed by push-delivered messages
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and cross-cutting primitives
//!   - Notification, reaction, quiz, and chat DTOs
//!   - Push event types, session context, configuration, errors
//!
//! - **`app`** - Desktop app (egui/eframe) and its state components
//!   - The reaction synchronizer, notification center, poll scheduler,
//!     quiz attempt, and club rooms
//!   - REST and push clients
//!   - Central `AppState` with the per-frame pump
//!
//! # Concurrency Model
//!
//! The UI thread owns all state. Network requests run on short-lived
//! background threads and report through `std::sync::mpsc` channels that the
//! per-frame pump drains, so UI callbacks, timer checks, and response
//! handling interleave cooperatively and never run in parallel. Responses to
//! superseded requests are discarded by sequence number; abandoned requests
//! are ignored because their channels are dropped.
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - Typed errors in `shared::error`; human-friendly strings at the API
//!   client boundary, surfaced as transient dismissable notices
/// Shared types and data structures
pub mod shared;

/// Desktop app and client-side state components
pub mod app;
