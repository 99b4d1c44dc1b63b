//! Browser-based tests for the guest page bindings
//!
//! These run under `wasm-pack test --headless` and exercise the pieces
//! that need a real window: geometry reads, listener registration, and
//! the source-window capture rules.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{MessageEvent, MessageEventInit};

use periscope_guest::Responder;
use periscope_hal::GuestHal;
use periscope_web::{GuestPage, WebHal, WindowEndpoint};

wasm_bindgen_test_configure!(run_in_browser);

/// screenLeft/screenTop alias screenX/screenY in every current browser,
/// so the four properties must agree pairwise.
#[wasm_bindgen_test]
fn web_hal_reads_live_geometry() {
    let hal = WebHal::new().unwrap();
    let geometry = hal.screen_geometry().unwrap();
    assert_eq!(geometry.left, geometry.x);
    assert_eq!(geometry.top, geometry.y);
}

/// A freshly started page has no embedder channel and replies with the
/// wildcard origin.
#[wasm_bindgen_test]
fn guest_page_starts_disconnected() {
    let page = GuestPage::new().unwrap();
    assert!(!page.channel_established());
    assert_eq!(page.target_origin(), "*");
}

/// Pinning the target origin is reflected back through the getter.
#[wasm_bindgen_test]
fn pinned_origin_is_reported() {
    let page = GuestPage::with_target_origin("https://embedder.example").unwrap();
    assert_eq!(page.target_origin(), "https://embedder.example");
}

/// A bare synthetic MessageEvent has no source window to reply to.
#[wasm_bindgen_test]
fn endpoint_requires_source_window() {
    let event = MessageEvent::new("message").unwrap();
    assert!(WindowEndpoint::from_event(&event).is_none());
}

/// Events without a source window are dropped before they reach the
/// responder, so even a well-formed handshake leaves no channel behind.
#[wasm_bindgen_test]
fn synthetic_event_without_source_is_ignored() {
    let page = GuestPage::new().unwrap();

    let init = MessageEventInit::new();
    init.set_data(&JsValue::from_str(r#"["create-channel"]"#));
    let event = MessageEvent::new_with_event_init_dict("message", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();

    assert!(!page.channel_established());
}

/// Drive the responder against the test window itself: the handshake
/// stores the endpoint and the query posts without error.
#[wasm_bindgen_test]
fn responder_answers_over_live_window() {
    let window = web_sys::window().unwrap();
    let mut responder = Responder::new(WebHal::new().unwrap());
    let me = WindowEndpoint::from_window(&window);

    responder.handle(r#"["create-channel"]"#, &me).unwrap();
    assert!(responder.channel_established());

    responder.handle(r#"["test1"]"#, &me).unwrap();
}
