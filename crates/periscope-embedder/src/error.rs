//! Error Types for the Embedder Client
//!
//! Defines errors that can occur while driving the channel from the
//! embedder side.

use periscope_hal::HalError;
use periscope_protocol::ProtocolError;

/// Errors that can occur in the embedder client.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ClientError {
    /// A query was attempted before `connect` was called or after it
    /// was reset.
    #[error("not connected: no channel handshake has been started")]
    NotConnected,

    /// A query was attempted while the handshake ack is still pending.
    #[error("handshake pending: guest has not acknowledged the channel yet")]
    HandshakePending,

    /// Reply text could not be decoded.
    ///
    /// Unlike the guest, the client treats unknown tags as errors too:
    /// everything arriving here should be a reply it solicited.
    #[error("malformed reply: {0}")]
    MalformedReply(#[from] ProtocolError),

    /// A reply arrived that nothing is waiting for.
    #[error("unsolicited reply: {0}")]
    UnsolicitedReply(&'static str),

    /// The platform refused to dispatch a request.
    #[error("request dispatch failed: {0:?}")]
    Notify(HalError),

    /// Serializing an outbound request failed.
    #[error("request encoding failed: {0}")]
    RequestEncoding(ProtocolError),
}
