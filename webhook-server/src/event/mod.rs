//! Inbound event intake: signature verification and payload decoding.
//!
//! ## Intake Flow
//!
//! ```text
//! raw body + signature header → parse_event_request() → Vec<Event>
//! ```

pub mod parse;
pub mod signature;
pub mod types;

pub use parse::{parse_event_request, EventRequestError};
pub use signature::verify_signature;
pub use types::{
    BeaconEvent, Event, EventSource, MessageContent, MessageEvent, PostbackEvent, SourcedEvent,
    StickerMessage, TextMessage, WebhookPayload,
};
