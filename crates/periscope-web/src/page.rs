//! The guest page entry point exported to JS

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;

use periscope_guest::{Responder, ResponderConfig};

use crate::endpoint::WindowEndpoint;
use crate::hal::WebHal;
use crate::util::log;

/// The guest page: a responder wired to this window's message events.
///
/// Constructing one registers the `"message"` listener and logs the
/// load-complete line the embedder harness waits for. Inbound events
/// that are not text, have no source window, or fail to parse are
/// logged and dropped; the listener keeps running either way.
#[wasm_bindgen]
pub struct GuestPage {
    /// Shared with the message closure below
    responder: Rc<RefCell<Responder<WebHal>>>,
    /// Keeps the "message" listener alive for the page's lifetime
    on_message: Closure<dyn FnMut(MessageEvent)>,
}

#[wasm_bindgen]
impl GuestPage {
    /// Start a guest page replying with the wildcard target origin.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<GuestPage, JsValue> {
        Self::start("*", ResponderConfig::default())
    }

    /// Start a guest page whose replies are pinned to one embedder origin.
    #[wasm_bindgen]
    pub fn with_target_origin(target_origin: &str) -> Result<GuestPage, JsValue> {
        Self::start(target_origin, ResponderConfig::default())
    }

    /// Whether the embedder handshake has completed.
    #[wasm_bindgen]
    pub fn channel_established(&self) -> bool {
        self.responder.borrow().channel_established()
    }

    /// The origin replies are addressed to.
    #[wasm_bindgen]
    pub fn target_origin(&self) -> String {
        String::from(self.responder.borrow().hal().target_origin())
    }
}

impl GuestPage {
    /// Full-control constructor for callers linking the rlib directly.
    pub fn start(target_origin: &str, config: ResponderConfig) -> Result<GuestPage, JsValue> {
        // Set up panic hook for better error messages
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let hal = WebHal::with_target_origin(target_origin)
            .map_err(|e| JsValue::from_str(&format!("cannot bind to this page: {:?}", e)))?;
        let window = hal.window().clone();
        let label = config.label.clone();

        let responder = Rc::new(RefCell::new(Responder::with_config(hal, config)));

        let handler = Rc::clone(&responder);
        let closure_label = label.clone();
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            let text = match event.data().as_string() {
                Some(text) => text,
                None => {
                    log(&format!("[{}] ignoring non-text message", closure_label));
                    return;
                }
            };
            let source = match WindowEndpoint::from_event(&event) {
                Some(source) => source,
                None => {
                    log(&format!(
                        "[{}] ignoring message with no source window",
                        closure_label
                    ));
                    return;
                }
            };
            if let Err(e) = handler.borrow_mut().handle(&text, &source) {
                log(&format!("[{}] dropping message: {}", closure_label, e));
            }
        }) as Box<dyn FnMut(MessageEvent)>);

        window
            .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
            .map_err(|_| JsValue::from_str("failed to attach message listener"))?;

        log(&format!("[{}] load complete", label));

        Ok(GuestPage {
            responder,
            on_message,
        })
    }
}

impl Drop for GuestPage {
    fn drop(&mut self) {
        // Detach the listener before the closure is destroyed, so a late
        // message cannot invoke a dead callback.
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "message",
                self.on_message.as_ref().unchecked_ref(),
            );
        }
    }
}
