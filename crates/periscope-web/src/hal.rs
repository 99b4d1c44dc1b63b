//! Browser HAL: postMessage dispatch and live screen geometry

use wasm_bindgen::JsValue;
use web_sys::Window;

use periscope_hal::{ChannelHal, GuestHal, HalError, ScreenGeometry};

use crate::endpoint::WindowEndpoint;
use crate::util::log;

/// Browser implementation of the channel HAL.
///
/// Replies go out over `postMessage` on the captured window handle.
/// Geometry is read off the live `Window` on every call, so a query
/// that arrives after the embedder moves always sees the new position.
pub struct WebHal {
    window: Window,
    target_origin: String,
}

impl WebHal {
    /// Create a HAL bound to this page's window, replying with the
    /// wildcard target origin.
    pub fn new() -> Result<Self, HalError> {
        Self::with_target_origin("*")
    }

    /// Create a HAL that pins replies to a specific embedder origin.
    pub fn with_target_origin(target_origin: &str) -> Result<Self, HalError> {
        let window = web_sys::window().ok_or(HalError::NotSupported)?;
        Ok(Self {
            window,
            target_origin: String::from(target_origin),
        })
    }

    /// The window this HAL is bound to.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The origin replies are addressed to.
    pub fn target_origin(&self) -> &str {
        &self.target_origin
    }

    /// Read one numeric screen property off the window.
    fn screen_prop(&self, name: &str) -> Result<i32, HalError> {
        js_sys::Reflect::get(self.window.as_ref(), &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_f64())
            .map(|value| value as i32)
            .ok_or(HalError::GeometryUnavailable)
    }
}

impl ChannelHal for WebHal {
    type Endpoint = WindowEndpoint;

    fn notify(&self, target: &Self::Endpoint, body: &str) -> Result<(), HalError> {
        target.post_text(body, &self.target_origin)
    }

    fn debug_write(&self, msg: &str) {
        log(msg);
    }
}

impl GuestHal for WebHal {
    fn screen_geometry(&self) -> Result<ScreenGeometry, HalError> {
        Ok(ScreenGeometry {
            x: self.screen_prop("screenX")?,
            y: self.screen_prop("screenY")?,
            left: self.screen_prop("screenLeft")?,
            top: self.screen_prop("screenTop")?,
        })
    }
}
