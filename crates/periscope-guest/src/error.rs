//! Error Types for the Guest Responder
//!
//! Defines errors that can occur while handling embedder messages.

use periscope_hal::HalError;
use periscope_protocol::ProtocolError;

/// Errors that can occur in the guest responder.
///
/// None of these are fatal to the page: the driver logs the error and
/// drops the message, then keeps listening.
#[derive(Clone, Debug, thiserror::Error)]
pub enum GuestError {
    /// Inbound message text broke the wire frame rules.
    ///
    /// This is distinct from an unknown tag, which is silently ignored.
    #[error("malformed message: {0}")]
    MalformedMessage(#[from] ProtocolError),

    /// A guest-initiated send was attempted before any handshake
    /// captured a channel.
    #[error("no channel to the embedder has been established")]
    ChannelNotEstablished,

    /// The platform could not report the window's screen geometry.
    #[error("screen geometry unavailable: {0:?}")]
    Geometry(HalError),

    /// The platform refused to dispatch a reply.
    #[error("reply dispatch failed: {0:?}")]
    Notify(HalError),

    /// Serializing an outbound reply failed.
    #[error("reply encoding failed: {0}")]
    ReplyEncoding(ProtocolError),
}
