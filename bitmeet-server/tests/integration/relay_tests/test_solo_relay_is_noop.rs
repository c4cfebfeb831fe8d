use bitmeet_core::{Signal, StateUpdate};
use serde_json::json;

use crate::integration::{TestRig, init_tracing};

#[test]
fn test_solo_member_relay_delivers_nothing() {
    init_tracing();
    let rig = TestRig::new();
    let carol = rig.join("r2", "carol");

    let report = rig
        .broadcaster
        .broadcast(&carol, StateUpdate::Code("print(1)".into()));
    assert_eq!(report.targets(), 0);

    let report = rig.signaling.relay(&carol, Signal::Offer(json!("SDP1")));
    assert_eq!(report.targets(), 0);

    assert!(rig.sink.is_empty());
}

#[test]
fn test_relay_from_departed_session_is_noop() {
    init_tracing();
    let rig = TestRig::new();
    let alice = rig.join("r1", "alice");
    rig.presence.on_disconnect(&alice.connection_id);

    let report = rig.signaling.relay(&alice, Signal::Offer(json!("SDP1")));

    assert_eq!(report.targets(), 0);
    assert!(rig.sink.is_empty());
}
