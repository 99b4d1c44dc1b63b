//! Browser bindings for the Periscope guest page
//!
//! This crate runs inside the embedded guest page. It wires a
//! [`periscope_guest::Responder`] to the page's `"message"` events,
//! reads screen geometry off the live window, and sends replies back
//! over `postMessage`.
//!
//! ## Module Structure
//!
//! - `endpoint` - opaque reply targets captured from message events
//! - `hal` - browser HAL: postMessage dispatch and screen geometry
//! - `page` - the `GuestPage` entry point exported to JS
//! - `util` - console logging binding

// =============================================================================
// Module declarations
// =============================================================================

mod endpoint;
mod hal;
mod page;
pub(crate) mod util;

// =============================================================================
// Public re-exports
// =============================================================================

pub use endpoint::WindowEndpoint;
pub use hal::WebHal;
pub use page::GuestPage;
