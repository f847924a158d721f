//! Decoded webhook event types.
//!
//! These mirror the JSON the platform delivers to the callback endpoint.
//! Events arrive as a batch; each event is tagged by `type`, and message
//! events carry a second `type` tag on their `message` object. Dispatch on
//! those tags happens in [`crate::event::parse`], which is why [`Event`] and
//! [`MessageContent`] are plain enums rather than serde-tagged ones.

use serde::Deserialize;

/// Top-level webhook body: the bot destination plus a batch of raw events.
///
/// Events are kept as raw JSON here so the parser can reject unknown event
/// and message types with distinct errors instead of a generic decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub destination: Option<String>,
    pub events: Vec<serde_json::Value>,
}

/// One decoded unit of activity reported by the platform.
#[derive(Debug, Clone)]
pub enum Event {
    Message(MessageEvent),
    Follow(SourcedEvent),
    Unfollow(SourcedEvent),
    Join(SourcedEvent),
    Leave(SourcedEvent),
    Postback(PostbackEvent),
    Beacon(BeaconEvent),
}

impl Event {
    /// Event type tag as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Message(_) => "message",
            Event::Follow(_) => "follow",
            Event::Unfollow(_) => "unfollow",
            Event::Join(_) => "join",
            Event::Leave(_) => "leave",
            Event::Postback(_) => "postback",
            Event::Beacon(_) => "beacon",
        }
    }
}

/// A message event: something was sent to the bot.
#[derive(Debug, Clone)]
pub struct MessageEvent {
    /// Token tying a reply to this event, consumed by the Reply API
    pub reply_token: String,
    pub source: Option<EventSource>,
    pub timestamp: i64,
    pub message: MessageContent,
}

/// Message payload, tagged by message type on the wire.
#[derive(Debug, Clone)]
pub enum MessageContent {
    Text(TextMessage),
    Image(CommonMessage),
    Video(CommonMessage),
    Audio(CommonMessage),
    Location(LocationMessage),
    Sticker(StickerMessage),
}

impl MessageContent {
    /// Message type tag as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            MessageContent::Text(_) => "text",
            MessageContent::Image(_) => "image",
            MessageContent::Video(_) => "video",
            MessageContent::Audio(_) => "audio",
            MessageContent::Location(_) => "location",
            MessageContent::Sticker(_) => "sticker",
        }
    }
}

/// A text message.
#[derive(Debug, Clone, Deserialize)]
pub struct TextMessage {
    pub id: String,
    pub text: String,
}

/// Media messages (image, video, audio) carry only an id; the content itself
/// is fetched from the platform separately and is not needed here.
#[derive(Debug, Clone, Deserialize)]
pub struct CommonMessage {
    pub id: String,
}

/// A location message.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationMessage {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// A sticker message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerMessage {
    pub id: String,
    pub package_id: String,
    pub sticker_id: String,
}

/// Where an event originated: a user, a group, or a room.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventSource {
    User {
        #[serde(rename = "userId")]
        user_id: String,
    },
    Group {
        #[serde(rename = "groupId")]
        group_id: String,
    },
    Room {
        #[serde(rename = "roomId")]
        room_id: String,
    },
}

/// Common shape of events that carry no payload beyond their source
/// (follow, unfollow, join, leave).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcedEvent {
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub source: Option<EventSource>,
    #[serde(default)]
    pub timestamp: i64,
}

/// A postback event from an interactive component.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostbackEvent {
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub source: Option<EventSource>,
    #[serde(default)]
    pub timestamp: i64,
    pub postback: PostbackData,
}

/// Postback payload: the opaque data string registered on the component.
#[derive(Debug, Clone, Deserialize)]
pub struct PostbackData {
    pub data: String,
}

/// A beacon enter/leave event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconEvent {
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub source: Option<EventSource>,
    #[serde(default)]
    pub timestamp: i64,
    pub beacon: BeaconData,
}

/// Beacon payload: hardware id plus the beacon event kind.
#[derive(Debug, Clone, Deserialize)]
pub struct BeaconData {
    pub hwid: String,
    #[serde(rename = "type")]
    pub beacon_type: String,
}
