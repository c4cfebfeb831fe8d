use bitmeet_core::{ServerEvent, StateUpdate};

use crate::integration::{TestRig, init_tracing};

#[test]
fn test_unreachable_target_does_not_stop_fan_out() {
    init_tracing();
    let rig = TestRig::new();
    let alice = rig.join("r1", "alice");
    let bob = rig.join("r1", "bob");
    let carol = rig.join("r1", "carol");
    let dave = rig.join("r1", "dave");
    rig.sink.clear();
    rig.sink.mark_unreachable(bob.connection_id);

    let report = rig
        .broadcaster
        .broadcast(&alice, StateUpdate::Output("42\n".into()));

    assert_eq!(report.delivered, 2);
    assert_eq!(report.dropped, 1);
    for reachable in [&carol, &dave] {
        assert_eq!(
            rig.sink.events_for(&reachable.connection_id),
            vec![ServerEvent::OutputUpdate("42\n".into())]
        );
    }
    assert!(rig.sink.events_for(&bob.connection_id).is_empty());
}

#[test]
fn test_unreachable_peer_does_not_block_presence() {
    init_tracing();
    let rig = TestRig::new();
    let alice = rig.join("r1", "alice");
    let bob = rig.join("r1", "bob");
    rig.sink.mark_unreachable(alice.connection_id);

    let change = rig
        .presence
        .on_disconnect(&bob.connection_id)
        .expect("bob had a session");

    assert_eq!(change.notified.dropped, 1);
    assert!(rig.registry.session_of(&bob.connection_id).is_none());
}
