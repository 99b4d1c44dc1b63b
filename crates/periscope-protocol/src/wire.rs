//! Message Frames for the Embedder-Guest Channel
//!
//! A channel message is a JSON array serialized to text: the tag first,
//! then an optional payload. Decoding is split in two stages so the
//! receiving side can distinguish *malformed* input (frame rules broken,
//! reported as [`ProtocolError`]) from *unknown* input (valid frame,
//! unrecognized tag):
//!
//! 1. [`RawMessage::decode`] validates the frame and extracts tag + payload.
//! 2. [`Request::from_raw`] / [`Reply::decode`] map the tag onto a typed
//!    message.

use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::tags;

// =============================================================================
// ScreenInfo
// =============================================================================

/// Screen geometry record carried by a screen query reply.
///
/// Field names follow the embedder-visible JSON contract (`screenX`,
/// `screenY`, `screenLeft`, `screenTop`), and declaration order is the
/// wire order, so encoded output is byte-stable.
///
/// The values are sampled from the live window at the moment the query
/// is answered, never cached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenInfo {
    /// Horizontal position of the window on the screen.
    #[serde(rename = "screenX")]
    pub screen_x: i32,
    /// Vertical position of the window on the screen.
    #[serde(rename = "screenY")]
    pub screen_y: i32,
    /// Alias reported alongside `screenX`; identical in browsers, but
    /// sampled separately so the record mirrors what the page observes.
    #[serde(rename = "screenLeft")]
    pub screen_left: i32,
    /// Alias reported alongside `screenY`, sampled separately.
    #[serde(rename = "screenTop")]
    pub screen_top: i32,
}

impl ScreenInfo {
    /// Create a record from the four sampled values.
    pub fn new(screen_x: i32, screen_y: i32, screen_left: i32, screen_top: i32) -> Self {
        Self {
            screen_x,
            screen_y,
            screen_left,
            screen_top,
        }
    }
}

// =============================================================================
// RawMessage
// =============================================================================

/// A validated but untyped channel message: tag plus optional payload.
///
/// This is the first decoding stage. It enforces the frame rules (JSON
/// array, non-empty, string tag) without constraining the tag value, so
/// callers can decide how to treat tags they do not know.
#[derive(Clone, Debug, PartialEq)]
pub struct RawMessage {
    /// The string discriminant from the first array element.
    pub tag: String,
    /// The second array element, if present. Elements past the second
    /// are ignored.
    pub payload: Option<Value>,
}

impl RawMessage {
    /// Decode message text into a validated frame.
    ///
    /// # Returns
    /// * `Ok(RawMessage)` - frame rules hold, tag extracted
    /// * `Err(ProtocolError)` - which frame rule was broken
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| ProtocolError::InvalidJson(e.to_string()))?;
        let items = value.as_array().ok_or(ProtocolError::NotAnArray)?;
        let first = items.first().ok_or(ProtocolError::EmptyMessage)?;
        let tag = first.as_str().ok_or(ProtocolError::TagNotString)?;

        Ok(Self {
            tag: String::from(tag),
            payload: items.get(1).cloned(),
        })
    }
}

// =============================================================================
// Request (embedder → guest)
// =============================================================================

/// Typed request sent by the embedder to the guest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    /// Capture the sender as the guest's reply channel.
    CreateChannel,
    /// Report the guest window's current screen geometry.
    ScreenQuery,
}

impl Request {
    /// Map a validated frame onto a typed request.
    ///
    /// Returns `None` for tags outside the protocol; the guest treats
    /// those as a silent no-op rather than an error.
    pub fn from_raw(raw: &RawMessage) -> Option<Self> {
        match raw.tag.as_str() {
            tags::CREATE_CHANNEL => Some(Request::CreateChannel),
            tags::SCREEN_QUERY => Some(Request::ScreenQuery),
            _ => None,
        }
    }

    /// The wire tag for this request.
    pub fn tag(&self) -> &'static str {
        match self {
            Request::CreateChannel => tags::CREATE_CHANNEL,
            Request::ScreenQuery => tags::SCREEN_QUERY,
        }
    }

    /// Encode the request as message text.
    ///
    /// Requests carry no payload, so the frame is a one-element array.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(&(self.tag(),)).map_err(|e| ProtocolError::Encode(e.to_string()))
    }
}

// =============================================================================
// Reply (guest → embedder)
// =============================================================================

/// Typed reply sent by the guest to the embedder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Handshake acknowledgment, no payload.
    ChannelCreated,
    /// Screen geometry report; echoes the query tag on the wire.
    Screen(ScreenInfo),
}

impl Reply {
    /// The wire tag for this reply.
    pub fn tag(&self) -> &'static str {
        match self {
            Reply::ChannelCreated => tags::CHANNEL_CREATED,
            Reply::Screen(_) => tags::SCREEN_QUERY,
        }
    }

    /// Encode the reply as message text.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        let encoded = match self {
            Reply::ChannelCreated => serde_json::to_string(&(self.tag(),)),
            Reply::Screen(info) => serde_json::to_string(&(self.tag(), info)),
        };
        encoded.map_err(|e| ProtocolError::Encode(e.to_string()))
    }

    /// Decode message text into a typed reply.
    ///
    /// Unlike the guest's request handling, an unrecognized tag here is
    /// an error: the embedder only ever receives replies it solicited.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let raw = RawMessage::decode(text)?;
        if raw.tag == tags::CHANNEL_CREATED {
            Ok(Reply::ChannelCreated)
        } else if raw.tag == tags::SCREEN_QUERY {
            let payload = raw.payload.ok_or_else(|| ProtocolError::BadPayload {
                tag: String::from(tags::SCREEN_QUERY),
                reason: String::from("missing screen info record"),
            })?;
            let info = serde_json::from_value(payload).map_err(|e| ProtocolError::BadPayload {
                tag: String::from(tags::SCREEN_QUERY),
                reason: e.to_string(),
            })?;
            Ok(Reply::Screen(info))
        } else {
            Err(ProtocolError::UnknownTag(raw.tag))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
