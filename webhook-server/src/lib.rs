//! Echo bot webhook service for the LINE Messaging API.
//!
//! This library backs the `echobot-server` binary:
//! - `event`: signature verification and webhook payload decoding
//! - `reply`: outbound message values and the Reply API client
//! - `web`: axum handlers for the callback endpoint
//!
//! ## Architecture
//!
//! ```text
//! POST /callback → verify + decode → per-event loop → Reply API
//! ```

pub mod config;
pub mod event;
pub mod reply;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use event::{parse_event_request, Event, EventRequestError, MessageContent};
pub use reply::{LineClient, OutboundMessage, ReplySender, ReplyStatus};
pub use web::AppState;
