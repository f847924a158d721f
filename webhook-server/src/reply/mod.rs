//! Outbound side: message values and the Reply API client.

pub mod client;
pub mod message;

pub use client::{LineClient, ReplyError, ReplySender, ReplyStatus};
pub use message::{OutboundMessage, ReplyRequest};
