//! Embedder-side client for the screen coordinates channel
//!
//! The initiating half of the protocol: sends `create-channel` to the
//! guest, waits for the `channel-created` ack, then issues screen
//! queries and matches the replies.
//!
//! The guest itself answers queries without any handshake, but this
//! client deliberately gates [`EmbedderClient::query_screen_info`] on a
//! completed handshake so a driving harness cannot race its own setup.
//!
//! # Example
//!
//! ```ignore
//! use periscope_embedder::EmbedderClient;
//! use periscope_hal_mock::MockHal;
//!
//! let mut client = EmbedderClient::new(MockHal::new());
//! client.connect(&guest_endpoint)?;
//! // ... deliver the guest's ack back into the client ...
//! client.on_reply(r#"["channel-created"]"#)?;
//! client.query_screen_info()?;
//! ```

#![no_std]

extern crate alloc;

mod client;
mod error;

pub use client::{ChannelState, EmbedderClient};
pub use error::ClientError;
