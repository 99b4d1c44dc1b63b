//! Platform abstraction traits for the guest screen coordinates channel
//!
//! This crate defines the two platform effects the channel logic needs
//! so the responder and the embedder client can run on different hosts:
//!
//! - **Message dispatch**: posting serialized text to an opaque endpoint
//! - **Screen geometry**: sampling the window's live on-screen position
//!
//! # Platform Implementations
//!
//! - **Browser**: `postMessage` on a window handle, `window.screenX`-family
//!   properties for geometry (`periscope-web`)
//! - **Tests**: scripted geometry and captured sends (`periscope-hal-mock`)

#![no_std]

/// Channel operations shared by both ends of the embedder-guest link.
///
/// # Associated Types
///
/// - `Endpoint`: Platform-specific handle to a message target
///   - On the browser: the window handle captured from a message event
///   - In tests: a numeric stand-in
///
/// Endpoints are page-local handles; implementations are driven from a
/// single-threaded event loop and need not be thread-safe.
pub trait ChannelHal {
    /// Handle to a message target (a window on the browser, a numeric id in tests)
    type Endpoint: Clone;

    /// Post serialized message text to an endpoint
    ///
    /// Fire-and-forget: success means the message was dispatched, not
    /// that the peer received or understood it. There is no retry.
    ///
    /// # Returns
    /// * `Ok(())` - Message dispatched
    /// * `Err(HalError::EndpointGone)` - The target no longer accepts messages
    /// * `Err(HalError::PostFailed)` - The platform refused the dispatch
    fn notify(&self, target: &Self::Endpoint, body: &str) -> Result<(), HalError>;

    /// Write a debug message to the platform's console/log
    ///
    /// On the browser: uses `console.log()`
    fn debug_write(&self, msg: &str);
}

/// Guest-side operations: everything a channel end can do, plus reading
/// the window's own placement on the screen.
pub trait GuestHal: ChannelHal {
    /// Sample the window's current screen geometry
    ///
    /// This must be a live read at call time; callers rely on successive
    /// samples observing window moves, so implementations must not cache.
    ///
    /// # Returns
    /// * `Ok(ScreenGeometry)` - The four position values as the page observes them
    /// * `Err(HalError::GeometryUnavailable)` - The platform could not report a position
    fn screen_geometry(&self) -> Result<ScreenGeometry, HalError>;
}

/// A raw screen placement sample.
///
/// `x`/`left` and `y`/`top` are aliases in every current browser, but
/// they are sampled as four separate reads so the record reflects
/// exactly what the page observes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenGeometry {
    /// `screenX`: horizontal window position
    pub x: i32,
    /// `screenY`: vertical window position
    pub y: i32,
    /// `screenLeft`: alias of `screenX`
    pub left: i32,
    /// `screenTop`: alias of `screenY`
    pub top: i32,
}

impl ScreenGeometry {
    /// Build a sample where the aliases agree, which is the normal
    /// browser-reported shape.
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            left: x,
            top: y,
        }
    }
}

/// HAL errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HalError {
    /// The endpoint's target has gone away (window closed or navigated)
    EndpointGone,
    /// The platform refused to dispatch the message
    PostFailed,
    /// Screen geometry could not be read
    GeometryUnavailable,
    /// Operation not supported on this platform
    NotSupported,
}

/// A simple endpoint for platforms that use numeric IDs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NumericEndpoint(pub u64);

impl NumericEndpoint {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}
