//! Guest-side responder for the screen coordinates channel
//!
//! A guest page embedded in a host document answers two messages from
//! its embedder:
//!
//! - **`create-channel`**: capture the sender as the reply channel and
//!   acknowledge with `channel-created`
//! - **`test1`**: sample the window's live screen geometry and report it
//!   straight back to the requester
//!
//! The [`Responder`] holds the per-page state (the captured channel) and
//! runs entirely reactively: one `handle` call per inbound message, no
//! timers, no blocking. Malformed input is reported as a distinct error
//! so the driver can log it and drop the message; unknown tags are a
//! silent no-op.
//!
//! # Example
//!
//! ```ignore
//! use periscope_guest::Responder;
//! use periscope_hal_mock::MockHal;
//! use periscope_hal::NumericEndpoint;
//!
//! let embedder = NumericEndpoint::new(1);
//! let mut responder = Responder::new(MockHal::new());
//! responder.handle(r#"["create-channel"]"#, &embedder)?;
//! responder.handle(r#"["test1"]"#, &embedder)?;
//! ```

#![no_std]

extern crate alloc;

mod config;
mod error;
mod responder;

pub use config::ResponderConfig;
pub use error::GuestError;
pub use responder::Responder;
