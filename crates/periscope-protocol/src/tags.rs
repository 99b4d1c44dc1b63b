//! Message tags for the embedder-guest channel.
//!
//! Tags are string discriminants carried as the first element of the wire
//! array. They are part of the public harness contract, so their literal
//! values must not change.

/// Handshake request (embedder → guest).
///
/// The guest captures the sender of this message as its reply channel.
pub const CREATE_CHANNEL: &str = "create-channel";

/// Handshake acknowledgment (guest → embedder).
///
/// Sent over the freshly captured channel, carries no payload.
pub const CHANNEL_CREATED: &str = "channel-created";

/// Screen geometry query (embedder → guest).
///
/// The reply echoes this tag with a `ScreenInfo` record as payload. The
/// literal is fixed by existing embedder harnesses.
pub const SCREEN_QUERY: &str = "test1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_distinct() {
        assert_ne!(CREATE_CHANNEL, CHANNEL_CREATED);
        assert_ne!(CREATE_CHANNEL, SCREEN_QUERY);
        assert_ne!(CHANNEL_CREATED, SCREEN_QUERY);
    }

    #[test]
    fn tags_match_harness_contract() {
        // These literals are wire-visible; a change here breaks every
        // embedder page already driving the protocol.
        assert_eq!(CREATE_CHANNEL, "create-channel");
        assert_eq!(CHANNEL_CREATED, "channel-created");
        assert_eq!(SCREEN_QUERY, "test1");
    }
}
