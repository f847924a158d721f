//! Outbound message values for the Reply API.
//!
//! Messages are plain immutable values built through constructor functions;
//! the Reply API's `type` tag is handled by serde.

use serde::Serialize;

/// A message payload sent back to the platform.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutboundMessage {
    Text { text: String },
}

impl OutboundMessage {
    /// Build a text message.
    pub fn text(text: impl Into<String>) -> Self {
        OutboundMessage::Text { text: text.into() }
    }
}

/// JSON body of a reply call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    /// Opaque token tying this reply to the triggering event
    pub reply_token: String,
    pub messages: Vec<OutboundMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_message_serialization() {
        let message = OutboundMessage::text("hello");

        let json = serde_json::to_string(&message).unwrap();

        assert_eq!(json, r#"{"type":"text","text":"hello"}"#);
    }

    #[test]
    fn test_reply_request_serialization() {
        let request = ReplyRequest {
            reply_token: "rt-1".to_string(),
            messages: vec![OutboundMessage::text("hello")],
        };

        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains(r#""replyToken":"rt-1""#));
        assert!(json.contains(r#""messages":[{"type":"text","text":"hello"}]"#));
    }
}
