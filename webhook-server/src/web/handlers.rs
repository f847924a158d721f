//! Webhook endpoint handlers.
//!
//! The callback handler does exactly three things:
//! 1. Reject requests without a signature header
//! 2. Verify and decode the event batch
//! 3. Echo each text message back through the reply sender
//!
//! Everything the handler talks to arrives through [`AppState`]; there is no
//! global client or logger.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::event::{parse_event_request, Event, EventRequestError, MessageContent};
use crate::reply::{OutboundMessage, ReplySender};

/// Header carrying the platform signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sender: Arc<dyn ReplySender>,
}

impl AppState {
    pub fn new(config: Config, sender: Arc<dyn ReplySender>) -> Self {
        Self {
            config: Arc::new(config),
            sender,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Callback Webhook
// =============================================================================

/// Webhook callback endpoint.
///
/// Rejects the whole request with 400 on a missing signature header or any
/// verification/decoding failure, otherwise walks the batch in order, echoes
/// each text message, and answers 200 `OK`.
pub async fn callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if signature.is_empty() {
        warn!("callback_signature_header_missing");
        return (StatusCode::BAD_REQUEST, "Bad Request");
    }

    let events = match parse_event_request(&state.config.channel_secret, &body, signature) {
        Ok(events) => events,
        Err(e) => {
            warn!(error = %e, "callback_rejected");
            return (StatusCode::BAD_REQUEST, rejection_reason(&e));
        }
    };

    info!(event_count = events.len(), "callback_received");

    for event in events {
        let message_event = match event {
            Event::Message(ev) => ev,
            other => {
                info!(event_type = other.kind(), "non_message_event_skipped");
                continue;
            }
        };

        let text = match &message_event.message {
            MessageContent::Text(msg) => msg.text.clone(),
            other => {
                info!(message_type = other.kind(), "non_text_message_skipped");
                continue;
            }
        };

        info!(reply_text = %text, "reply_text");

        let messages = [OutboundMessage::text(text)];
        match state
            .sender
            .send_reply(&message_event.reply_token, &messages)
            .await
        {
            Ok(reply) => {
                info!(status = reply.status, body = %reply.body, "reply_complete");
            }
            // A failed reply does not abort the batch
            Err(e) => {
                error!(error = %e, "reply_failed");
            }
        }
    }

    (StatusCode::OK, "OK")
}

/// Response reason for each rejection kind.
fn rejection_reason(error: &EventRequestError) -> &'static str {
    match error {
        EventRequestError::InvalidSignature => "Invalid signature",
        EventRequestError::UnknownEventType(_) => "Unknown event type has come",
        EventRequestError::UnknownMessageType(_) => "Unknown message type has come",
        EventRequestError::InvalidRequest(_) => "Invalid event request",
    }
}
