//! Error Types for the Channel Wire Format
//!
//! Defines what can go wrong while decoding or encoding channel messages.

use alloc::string::String;

/// Errors that can occur during message decoding or encoding.
///
/// Decode errors describe exactly which frame rule a malformed message
/// broke, so the receiving side can log a useful reason before dropping
/// the message.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The text was not valid JSON at all.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// The JSON parsed, but the top-level value is not an array.
    #[error("message is not a JSON array")]
    NotAnArray,

    /// The message array has no elements, so there is no tag.
    #[error("message array is empty")]
    EmptyMessage,

    /// The first array element is not a string.
    #[error("message tag is not a string")]
    TagNotString,

    /// The payload element does not match what the tag requires.
    #[error("bad payload for '{tag}': {reason}")]
    BadPayload { tag: String, reason: String },

    /// The tag is not part of the protocol.
    ///
    /// Only reply decoding treats this as an error; the guest ignores
    /// unknown request tags instead.
    #[error("unknown message tag '{0}'")]
    UnknownTag(String),

    /// Serializing an outbound message failed.
    #[error("encoding failed: {0}")]
    Encode(String),
}
