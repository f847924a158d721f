//! Signature verification and event batch decoding.
//!
//! [`parse_event_request`] is the single entry point for turning a raw
//! callback body into typed events. The whole batch is rejected on the first
//! failure; there is no partial decoding.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::signature::verify_signature;
use super::types::{Event, EventSource, MessageContent, MessageEvent, WebhookPayload};

/// Why an event request was rejected.
#[derive(Debug, Error)]
pub enum EventRequestError {
    /// The signature header does not match the request body.
    #[error("invalid signature")]
    InvalidSignature,

    /// The batch contains an event of a type this bot does not know.
    #[error("unknown event type: {0}")]
    UnknownEventType(String),

    /// The batch contains a message of a type this bot does not know.
    #[error("unknown message type: {0}")]
    UnknownMessageType(String),

    /// The body is not a well-formed event request.
    #[error("invalid event request: {0}")]
    InvalidRequest(String),
}

/// Verify the signature and decode the request body into an event batch.
///
/// Checks run in order: signature first, then the payload envelope, then each
/// event. Events come back in the order the platform sent them.
pub fn parse_event_request(
    channel_secret: &str,
    body: &[u8],
    signature: &str,
) -> Result<Vec<Event>, EventRequestError> {
    if !verify_signature(channel_secret, body, signature) {
        return Err(EventRequestError::InvalidSignature);
    }

    let payload: WebhookPayload = serde_json::from_slice(body)
        .map_err(|e| EventRequestError::InvalidRequest(e.to_string()))?;

    payload.events.iter().map(parse_event).collect()
}

/// Decode one raw event, dispatching on its `type` tag.
fn parse_event(raw: &Value) -> Result<Event, EventRequestError> {
    let kind = raw
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| EventRequestError::InvalidRequest("event without a type field".into()))?;

    match kind {
        "message" => parse_message_event(raw),
        "follow" => decode(raw).map(Event::Follow),
        "unfollow" => decode(raw).map(Event::Unfollow),
        "join" => decode(raw).map(Event::Join),
        "leave" => decode(raw).map(Event::Leave),
        "postback" => decode(raw).map(Event::Postback),
        "beacon" => decode(raw).map(Event::Beacon),
        other => Err(EventRequestError::UnknownEventType(other.to_string())),
    }
}

/// Decode a message event, dispatching on the inner `message.type` tag.
fn parse_message_event(raw: &Value) -> Result<Event, EventRequestError> {
    let message = raw.get("message").ok_or_else(|| {
        EventRequestError::InvalidRequest("message event without a message field".into())
    })?;

    let message_kind = message
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| EventRequestError::InvalidRequest("message without a type field".into()))?;

    let content = match message_kind {
        "text" => MessageContent::Text(decode(message)?),
        "image" => MessageContent::Image(decode(message)?),
        "video" => MessageContent::Video(decode(message)?),
        "audio" => MessageContent::Audio(decode(message)?),
        "location" => MessageContent::Location(decode(message)?),
        "sticker" => MessageContent::Sticker(decode(message)?),
        other => return Err(EventRequestError::UnknownMessageType(other.to_string())),
    };

    let head: MessageEventHead = decode(raw)?;

    Ok(Event::Message(MessageEvent {
        reply_token: head.reply_token,
        source: head.source,
        timestamp: head.timestamp,
        message: content,
    }))
}

/// Envelope fields of a message event, decoded separately from the message
/// payload so the payload can be dispatched by hand.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageEventHead {
    reply_token: String,
    #[serde(default)]
    source: Option<EventSource>,
    #[serde(default)]
    timestamp: i64,
}

fn decode<T: DeserializeOwned>(raw: &Value) -> Result<T, EventRequestError> {
    serde_json::from_value(raw.clone()).map_err(|e| EventRequestError::InvalidRequest(e.to_string()))
}
