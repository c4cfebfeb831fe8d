use bitmeet_core::ConnectionId;

use crate::integration::{TestRig, init_tracing, room};

#[test]
fn test_second_leave_has_no_effect() {
    init_tracing();
    let rig = TestRig::new();
    let alice = rig.join("r1", "alice");
    let bob = rig.join("r1", "bob");

    assert!(rig.presence.on_leave(&bob.connection_id, &room("r1")).is_some());
    let after_first = rig.sink.all();

    assert!(rig.presence.on_leave(&bob.connection_id, &room("r1")).is_none());
    assert!(rig.presence.on_disconnect(&bob.connection_id).is_none());

    assert_eq!(rig.sink.all(), after_first);
    assert_eq!(
        rig.registry.members_of(&room("r1"), &bob.connection_id),
        vec![alice]
    );
}

#[test]
fn test_disconnect_without_session_is_noop() {
    init_tracing();
    let rig = TestRig::new();
    rig.join("r1", "alice");

    assert!(rig.presence.on_disconnect(&ConnectionId::new()).is_none());
    assert!(rig.sink.is_empty());
    assert_eq!(rig.registry.session_count(), 1);
}
