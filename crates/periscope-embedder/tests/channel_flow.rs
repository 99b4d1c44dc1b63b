//! Channel Flow Tests
//!
//! End-to-end conversations between the embedder client and the guest
//! responder, with message delivery pumped by hand over mock HALs.

use periscope_embedder::EmbedderClient;
use periscope_guest::Responder;
use periscope_hal::{NumericEndpoint, ScreenGeometry};
use periscope_hal_mock::MockHal;
use periscope_protocol::ScreenInfo;

const GUEST_WINDOW: NumericEndpoint = NumericEndpoint(1);
const EMBEDDER_WINDOW: NumericEndpoint = NumericEndpoint(2);

/// Deliver everything the embedder sent into the guest responder.
fn pump_to_guest(client: &EmbedderClient<MockHal>, responder: &mut Responder<MockHal>) {
    for (target, body) in client.hal().take_sent() {
        assert_eq!(target, GUEST_WINDOW);
        responder.handle(&body, &EMBEDDER_WINDOW).unwrap();
    }
}

/// Deliver everything the guest sent into the embedder client, returning
/// the screen info records that resolved queries.
fn pump_to_embedder(
    responder: &Responder<MockHal>,
    client: &mut EmbedderClient<MockHal>,
) -> Vec<ScreenInfo> {
    let mut resolved = Vec::new();
    for (target, body) in responder.hal().take_sent() {
        assert_eq!(target, EMBEDDER_WINDOW);
        if let Some(info) = client.on_reply(&body).unwrap() {
            resolved.push(info);
        }
    }
    resolved
}

/// Test the whole conversation: handshake, ack, query, geometry report.
#[test]
fn test_full_conversation() {
    let mut client = EmbedderClient::new(MockHal::new());
    let mut responder = Responder::new(MockHal::with_geometry(ScreenGeometry::at(47, 83)));

    client.connect(&GUEST_WINDOW).unwrap();
    pump_to_guest(&client, &mut responder);
    assert!(responder.channel_established());

    let resolved = pump_to_embedder(&responder, &mut client);
    assert!(resolved.is_empty());
    assert!(client.is_connected());

    client.query_screen_info().unwrap();
    pump_to_guest(&client, &mut responder);
    let resolved = pump_to_embedder(&responder, &mut client);

    assert_eq!(resolved, [ScreenInfo::new(47, 83, 47, 83)]);
    assert_eq!(client.pending_queries(), 0);
}

/// Test that two queries around a window move observe both positions.
#[test]
fn test_window_move_is_observed() {
    let mut client = EmbedderClient::new(MockHal::new());
    let mut responder = Responder::new(MockHal::new());

    client.connect(&GUEST_WINDOW).unwrap();
    pump_to_guest(&client, &mut responder);
    pump_to_embedder(&responder, &mut client);

    client.query_screen_info().unwrap();
    pump_to_guest(&client, &mut responder);
    let first = pump_to_embedder(&responder, &mut client);

    responder.hal().set_geometry(ScreenGeometry::at(800, 600));

    client.query_screen_info().unwrap();
    pump_to_guest(&client, &mut responder);
    let second = pump_to_embedder(&responder, &mut client);

    assert_eq!(first, [ScreenInfo::new(0, 0, 0, 0)]);
    assert_eq!(second, [ScreenInfo::new(800, 600, 800, 600)]);
}

/// Test the exact text that crosses the channel in each direction.
#[test]
fn test_wire_text_end_to_end() {
    let mut client = EmbedderClient::new(MockHal::new());
    let mut responder = Responder::new(MockHal::with_geometry(ScreenGeometry::at(10, 20)));

    client.connect(&GUEST_WINDOW).unwrap();
    let outbound = client.hal().take_sent();
    assert_eq!(outbound[0].1, r#"["create-channel"]"#);

    responder.handle(&outbound[0].1, &EMBEDDER_WINDOW).unwrap();
    let ack = responder.hal().take_sent();
    assert_eq!(ack[0].1, r#"["channel-created"]"#);

    client.on_reply(&ack[0].1).unwrap();
    client.query_screen_info().unwrap();
    let outbound = client.hal().take_sent();
    assert_eq!(outbound[0].1, r#"["test1"]"#);

    responder.handle(&outbound[0].1, &EMBEDDER_WINDOW).unwrap();
    let reply = responder.hal().take_sent();
    assert_eq!(
        reply[0].1,
        r#"["test1",{"screenX":10,"screenY":20,"screenLeft":10,"screenTop":20}]"#
    );

    let info = client.on_reply(&reply[0].1).unwrap();
    assert_eq!(info, Some(ScreenInfo::new(10, 20, 10, 20)));
}

/// Test that both ends leave a readable trail in their debug logs.
#[test]
fn test_conversation_is_logged_on_both_ends() {
    let mut client = EmbedderClient::new(MockHal::new());
    let mut responder = Responder::new(MockHal::new());

    client.connect(&GUEST_WINDOW).unwrap();
    pump_to_guest(&client, &mut responder);
    pump_to_embedder(&responder, &mut client);

    client.query_screen_info().unwrap();
    pump_to_guest(&client, &mut responder);
    pump_to_embedder(&responder, &mut client);

    assert!(client.hal().has_log_containing("[embedder] handshake sent"));
    assert!(client
        .hal()
        .has_log_containing("[embedder] channel to guest established"));
    assert!(client.hal().has_log_containing("[embedder] screen info:"));

    assert!(responder
        .hal()
        .has_log_containing("[guest] received 'create-channel'"));
    assert!(responder
        .hal()
        .has_log_containing("[guest] channel to embedder established"));
    assert!(responder.hal().has_log_containing("[guest] received 'test1'"));
}
