//! Shared Types
//!
//! Types shared between the state components, the REST client, and the push
//! client: configuration, session context, wire DTOs, push events, errors.

pub mod config;
pub mod error;
pub mod event;
pub mod portal;
pub mod session;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use event::PushEvent;
pub use session::SessionContext;
