//! The guest responder: per-page channel state and message dispatch.

use alloc::format;

use periscope_hal::GuestHal;
use periscope_protocol::{RawMessage, Reply, Request, ScreenInfo};

use crate::config::ResponderConfig;
use crate::error::GuestError;

/// Guest-side message responder.
///
/// One instance per guest page. It owns the platform HAL and the single
/// piece of session state: the reply channel captured by the most recent
/// `create-channel` handshake.
///
/// # Message contract
///
/// | Inbound            | Action                       | Reply target        |
/// |--------------------|------------------------------|---------------------|
/// | `["create-channel"]` | capture sender as channel  | the captured channel |
/// | `["test1"]`          | sample live geometry       | the requester       |
/// | unknown tag          | none                       | none                |
/// | malformed text       | `Err(MalformedMessage)`    | none                |
///
/// A screen query is answered whether or not a handshake has happened;
/// the reply goes straight back to whoever asked. A repeated handshake
/// overwrites the stored channel, last writer wins, and the displaced
/// endpoint is not notified.
pub struct Responder<H: GuestHal> {
    /// Platform operations (message dispatch, geometry, logging)
    hal: H,
    /// Reply channel captured by the most recent handshake
    channel: Option<H::Endpoint>,
    /// Log labeling and tracing knobs
    config: ResponderConfig,
}

impl<H: GuestHal> Responder<H> {
    /// Create a responder with the default configuration.
    pub fn new(hal: H) -> Self {
        Self::with_config(hal, ResponderConfig::default())
    }

    /// Create a responder with a specific configuration.
    pub fn with_config(hal: H, config: ResponderConfig) -> Self {
        Self {
            hal,
            channel: None,
            config,
        }
    }

    /// Handle one inbound message.
    ///
    /// `raw` is the message text exactly as received; `source` is the
    /// endpoint that sent it, used as the reply target for queries.
    ///
    /// # Returns
    /// * `Ok(())` - message handled, or ignored as an unknown tag
    /// * `Err(GuestError::MalformedMessage)` - text broke the frame rules
    /// * `Err(_)` - a reply could not be produced or dispatched
    pub fn handle(&mut self, raw: &str, source: &H::Endpoint) -> Result<(), GuestError> {
        let msg = RawMessage::decode(raw)?;
        self.trace(&format!("received '{}'", msg.tag));

        match Request::from_raw(&msg) {
            Some(Request::CreateChannel) => self.handle_create_channel(source),
            Some(Request::ScreenQuery) => self.handle_screen_query(source),
            None => {
                // Tolerated so embedder harnesses can add messages
                // without breaking older guests.
                self.trace(&format!("ignoring unknown tag '{}'", msg.tag));
                Ok(())
            }
        }
    }

    /// Send a guest-initiated reply over the captured channel.
    ///
    /// # Returns
    /// * `Err(GuestError::ChannelNotEstablished)` - no handshake yet
    pub fn notify_embedder(&self, reply: &Reply) -> Result<(), GuestError> {
        let target = self
            .channel
            .as_ref()
            .ok_or(GuestError::ChannelNotEstablished)?;
        self.send(target, reply)
    }

    /// Whether a handshake has captured a reply channel.
    pub fn channel_established(&self) -> bool {
        self.channel.is_some()
    }

    /// The captured reply channel, if any.
    pub fn channel(&self) -> Option<&H::Endpoint> {
        self.channel.as_ref()
    }

    /// The platform HAL backing this responder.
    pub fn hal(&self) -> &H {
        &self.hal
    }

    /// This responder's configuration.
    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    // =========================================================================
    // Request handlers
    // =========================================================================

    /// Handle `create-channel`: capture the sender, then acknowledge.
    fn handle_create_channel(&mut self, source: &H::Endpoint) -> Result<(), GuestError> {
        self.channel = Some(source.clone());
        self.log("channel to embedder established");
        // The ack travels over the channel just captured.
        self.notify_embedder(&Reply::ChannelCreated)
    }

    /// Handle `test1`: sample live geometry, report to the requester.
    ///
    /// No handshake is required first; the reply goes straight back to
    /// `source` even when a channel to a different endpoint exists.
    fn handle_screen_query(&self, source: &H::Endpoint) -> Result<(), GuestError> {
        let info = self.sample_screen_info()?;
        self.send(source, &Reply::Screen(info))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Read the window's position off the platform, at call time.
    fn sample_screen_info(&self) -> Result<ScreenInfo, GuestError> {
        let g = self.hal.screen_geometry().map_err(GuestError::Geometry)?;
        Ok(ScreenInfo::new(g.x, g.y, g.left, g.top))
    }

    /// Encode and dispatch one reply.
    fn send(&self, target: &H::Endpoint, reply: &Reply) -> Result<(), GuestError> {
        let body = reply.encode().map_err(GuestError::ReplyEncoding)?;
        self.hal.notify(target, &body).map_err(GuestError::Notify)
    }

    fn log(&self, msg: &str) {
        self.hal
            .debug_write(&format!("[{}] {}", self.config.label, msg));
    }

    fn trace(&self, msg: &str) {
        if self.config.trace_messages {
            self.log(msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use periscope_hal::{HalError, NumericEndpoint, ScreenGeometry};
    use periscope_hal_mock::MockHal;

    fn embedder() -> NumericEndpoint {
        NumericEndpoint::new(1)
    }

    #[test]
    fn handshake_captures_channel_and_acks() {
        let mut responder = Responder::new(MockHal::new());
        assert!(!responder.channel_established());

        responder
            .handle(r#"["create-channel"]"#, &embedder())
            .unwrap();

        assert!(responder.channel_established());
        assert_eq!(responder.channel(), Some(&embedder()));
        let acks = responder.hal().sent_to(embedder());
        assert_eq!(acks, [String::from(r#"["channel-created"]"#)]);
    }

    #[test]
    fn screen_query_needs_no_handshake() {
        let mut responder = Responder::new(MockHal::with_geometry(ScreenGeometry::at(10, 20)));

        responder.handle(r#"["test1"]"#, &embedder()).unwrap();

        assert!(!responder.channel_established());
        let replies = responder.hal().sent_to(embedder());
        assert_eq!(
            replies,
            [String::from(
                r#"["test1",{"screenX":10,"screenY":20,"screenLeft":10,"screenTop":20}]"#
            )]
        );
    }

    #[test]
    fn unknown_tag_is_a_silent_no_op() {
        let mut responder = Responder::new(MockHal::new());

        responder.handle(r#"["test2"]"#, &embedder()).unwrap();

        assert_eq!(responder.hal().sent_count(), 0);
        assert!(!responder.channel_established());
    }

    #[test]
    fn malformed_text_is_a_distinct_error() {
        let mut responder = Responder::new(MockHal::new());

        let result = responder.handle("not json", &embedder());
        assert!(matches!(result, Err(GuestError::MalformedMessage(_))));

        let result = responder.handle("[]", &embedder());
        assert!(matches!(result, Err(GuestError::MalformedMessage(_))));

        // Nothing was sent and no state changed on either failure
        assert_eq!(responder.hal().sent_count(), 0);
        assert!(!responder.channel_established());
    }

    #[test]
    fn notify_embedder_requires_a_channel() {
        let responder = Responder::new(MockHal::new());

        let result = responder.notify_embedder(&Reply::ChannelCreated);
        assert!(matches!(result, Err(GuestError::ChannelNotEstablished)));
    }

    #[test]
    fn geometry_failure_is_reported_not_sent() {
        let mut responder = Responder::new(MockHal::new());
        responder.hal().set_geometry_unavailable(true);

        let result = responder.handle(r#"["test1"]"#, &embedder());
        assert!(matches!(
            result,
            Err(GuestError::Geometry(HalError::GeometryUnavailable))
        ));
        assert_eq!(responder.hal().sent_count(), 0);
    }

    #[test]
    fn notify_failure_surfaces_as_error() {
        let mut responder = Responder::new(MockHal::new());
        responder.hal().fail_next_notify();

        let result = responder.handle(r#"["create-channel"]"#, &embedder());
        assert!(matches!(
            result,
            Err(GuestError::Notify(HalError::PostFailed))
        ));
        // The channel was still captured; only the ack was lost
        assert!(responder.channel_established());
    }
}
