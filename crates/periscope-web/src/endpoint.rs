//! Opaque reply targets captured from message events

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MessageEvent, Window};

use periscope_hal::HalError;

/// Handle to the window that sent a message.
///
/// A cross-origin embedder hands the guest a restricted `WindowProxy`:
/// `postMessage` is callable on it, but `instanceof Window` checks fail.
/// The handle therefore stays untyped and `postMessage` is looked up and
/// invoked dynamically instead of going through a `web_sys::Window` cast.
#[derive(Clone, Debug)]
pub struct WindowEndpoint {
    target: JsValue,
}

impl WindowEndpoint {
    /// Capture the source window of a message event.
    ///
    /// Returns `None` when the event carries no source. Window-to-window
    /// messages always have one, but the field is nullable in the DOM
    /// (synthetic events, closed senders).
    pub fn from_event(event: &MessageEvent) -> Option<Self> {
        let target = js_sys::Reflect::get(event.as_ref(), &"source".into()).ok()?;
        if target.is_null() || target.is_undefined() {
            return None;
        }
        Some(Self { target })
    }

    /// Wrap a window the caller already holds (e.g. `window.parent`).
    pub fn from_window(window: &Window) -> Self {
        Self {
            target: JsValue::from(window.clone()),
        }
    }

    /// Post message text to this window, addressed to `target_origin`.
    pub fn post_text(&self, body: &str, target_origin: &str) -> Result<(), HalError> {
        let method = js_sys::Reflect::get(&self.target, &"postMessage".into())
            .map_err(|_| HalError::EndpointGone)?;
        let method: js_sys::Function = method.dyn_into().map_err(|_| HalError::EndpointGone)?;
        method
            .call2(
                &self.target,
                &JsValue::from_str(body),
                &JsValue::from_str(target_origin),
            )
            .map(|_| ())
            .map_err(|_| HalError::PostFailed)
    }
}
