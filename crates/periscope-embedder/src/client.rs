//! The embedder client: handshake state machine and query tracking.

use alloc::format;

use periscope_hal::ChannelHal;
use periscope_protocol::{Reply, Request, ScreenInfo};

use crate::error::ClientError;

/// State of the channel to the guest.
///
/// The channel moves forward one step per protocol event and never
/// skips: queries are only allowed once the guest has acknowledged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelState<E> {
    /// No handshake has been started.
    Disconnected,
    /// `create-channel` sent, waiting for the guest's ack.
    Connecting(E),
    /// Handshake acknowledged; queries may be issued.
    Connected(E),
}

impl<E> ChannelState<E> {
    /// Check if the handshake has completed.
    pub fn is_connected(&self) -> bool {
        matches!(self, ChannelState::Connected(_))
    }

    /// The guest endpoint, if a handshake has at least been started.
    pub fn endpoint(&self) -> Option<&E> {
        match self {
            ChannelState::Disconnected => None,
            ChannelState::Connecting(e) | ChannelState::Connected(e) => Some(e),
        }
    }
}

/// Embedder-side channel client.
///
/// Sends the handshake and screen queries to a guest and consumes the
/// replies the transport hands back via [`EmbedderClient::on_reply`].
///
/// The guest would answer a query from anyone at any time; this client
/// still refuses to send one before its own handshake has completed, so
/// a harness built on it cannot observe replies it has no context for.
pub struct EmbedderClient<H: ChannelHal> {
    /// Platform operations (message dispatch, logging)
    hal: H,
    /// Where the handshake stands
    state: ChannelState<H::Endpoint>,
    /// Screen queries sent but not yet answered
    pending_queries: u32,
}

impl<H: ChannelHal> EmbedderClient<H> {
    /// Create a client with no channel.
    pub fn new(hal: H) -> Self {
        Self {
            hal,
            state: ChannelState::Disconnected,
            pending_queries: 0,
        }
    }

    /// Start (or restart) the handshake with a guest.
    ///
    /// Sends `create-channel` and enters `Connecting`. On a dispatch
    /// failure the state is left untouched.
    pub fn connect(&mut self, guest: &H::Endpoint) -> Result<(), ClientError> {
        self.send(guest, &Request::CreateChannel)?;
        self.state = ChannelState::Connecting(guest.clone());
        self.log("handshake sent");
        Ok(())
    }

    /// Ask the guest for its current screen geometry.
    ///
    /// # Returns
    /// * `Err(ClientError::NotConnected)` - `connect` has not been called
    /// * `Err(ClientError::HandshakePending)` - ack not yet received
    pub fn query_screen_info(&mut self) -> Result<(), ClientError> {
        let guest = match &self.state {
            ChannelState::Connected(e) => e.clone(),
            ChannelState::Connecting(_) => return Err(ClientError::HandshakePending),
            ChannelState::Disconnected => return Err(ClientError::NotConnected),
        };
        self.send(&guest, &Request::ScreenQuery)?;
        self.pending_queries += 1;
        Ok(())
    }

    /// Consume one reply delivered by the transport.
    ///
    /// # Returns
    /// * `Ok(Some(ScreenInfo))` - a pending screen query was answered
    /// * `Ok(None)` - the handshake advanced (or a duplicate ack arrived)
    /// * `Err(_)` - the text was malformed or nothing solicited it
    pub fn on_reply(&mut self, raw: &str) -> Result<Option<ScreenInfo>, ClientError> {
        match Reply::decode(raw)? {
            Reply::ChannelCreated => self.on_channel_created(),
            Reply::Screen(info) => self.on_screen_info(info),
        }
    }

    /// Check if the handshake has completed.
    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    /// Where the handshake stands.
    pub fn state(&self) -> &ChannelState<H::Endpoint> {
        &self.state
    }

    /// Number of screen queries awaiting an answer.
    pub fn pending_queries(&self) -> u32 {
        self.pending_queries
    }

    /// The platform HAL backing this client.
    pub fn hal(&self) -> &H {
        &self.hal
    }

    // =========================================================================
    // Reply handlers
    // =========================================================================

    fn on_channel_created(&mut self) -> Result<Option<ScreenInfo>, ClientError> {
        let state = core::mem::replace(&mut self.state, ChannelState::Disconnected);
        match state {
            ChannelState::Connecting(guest) => {
                self.state = ChannelState::Connected(guest);
                self.log("channel to guest established");
                Ok(None)
            }
            ChannelState::Connected(guest) => {
                // Duplicate ack, e.g. after the guest re-handshook; harmless
                self.state = ChannelState::Connected(guest);
                self.log("ignoring duplicate channel ack");
                Ok(None)
            }
            ChannelState::Disconnected => Err(ClientError::UnsolicitedReply(
                "channel-created arrived before connect",
            )),
        }
    }

    fn on_screen_info(&mut self, info: ScreenInfo) -> Result<Option<ScreenInfo>, ClientError> {
        if self.pending_queries == 0 {
            return Err(ClientError::UnsolicitedReply(
                "screen info arrived with no pending query",
            ));
        }
        self.pending_queries -= 1;
        self.log(&format!(
            "screen info: x={} y={} left={} top={}",
            info.screen_x, info.screen_y, info.screen_left, info.screen_top
        ));
        Ok(Some(info))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn send(&self, target: &H::Endpoint, request: &Request) -> Result<(), ClientError> {
        let body = request.encode().map_err(ClientError::RequestEncoding)?;
        self.hal.notify(target, &body).map_err(ClientError::Notify)
    }

    fn log(&self, msg: &str) {
        self.hal.debug_write(&format!("[embedder] {}", msg));
    }
}
