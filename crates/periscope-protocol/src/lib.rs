//! Wire protocol for the embedder-guest screen coordinates channel
//!
//! This crate defines:
//! - **Message tags** (the string discriminants on the wire)
//! - **Message frames** (`RawMessage`, `Request`, `Reply`)
//! - **ScreenInfo** (the geometry record carried by a screen reply)
//!
//! It is the **single source of truth** for the channel's wire format,
//! shared by the guest responder and the embedder client.
//!
//! # Wire Format
//!
//! Every message is a JSON array serialized to text, with the tag as the
//! first element and an optional payload as the second:
//!
//! | Direction        | Message                                   |
//! |------------------|-------------------------------------------|
//! | embedder → guest | `["create-channel"]`                      |
//! | guest → embedder | `["channel-created"]`                     |
//! | embedder → guest | `["test1"]`                               |
//! | guest → embedder | `["test1", {"screenX": ..., ...}]`        |
//!
//! Elements past the second are tolerated and ignored. Anything that is
//! not a JSON array with a leading string tag is rejected with a
//! [`ProtocolError`] describing what was wrong.

#![no_std]

extern crate alloc;

mod error;
pub mod tags;
mod wire;

pub use error::ProtocolError;
pub use wire::{RawMessage, Reply, Request, ScreenInfo};
