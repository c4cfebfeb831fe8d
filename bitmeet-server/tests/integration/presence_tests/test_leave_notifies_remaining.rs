use bitmeet_core::ServerEvent;

use crate::integration::{TestRig, init_tracing, room, user};

#[test]
fn test_explicit_leave_notifies_remaining() {
    init_tracing();
    let rig = TestRig::new();
    let alice = rig.join("r1", "alice");
    let bob = rig.join("r1", "bob");
    let carol = rig.join("r1", "carol");
    rig.sink.clear();

    let change = rig
        .presence
        .on_leave(&bob.connection_id, &room("r1"))
        .expect("bob was in r1");

    assert_eq!(change.session, bob);
    assert_eq!(change.notified.delivered, 2);

    let left = ServerEvent::UserLeft {
        user_id: user("bob"),
        session_id: bob.connection_id,
    };
    assert_eq!(rig.sink.events_for(&alice.connection_id), vec![left.clone()]);
    assert_eq!(rig.sink.events_for(&carol.connection_id), vec![left]);
    assert!(
        rig.sink.events_for(&bob.connection_id).is_empty(),
        "the departing session is never told about itself"
    );
}

#[test]
fn test_disconnect_notifies_remaining_and_cleans_up() {
    init_tracing();
    let rig = TestRig::new();
    let alice = rig.join("r1", "alice");
    let bob = rig.join("r1", "bob");
    rig.sink.clear();

    rig.presence.on_disconnect(&bob.connection_id);

    assert_eq!(
        rig.sink.events_for(&alice.connection_id),
        vec![ServerEvent::UserLeft {
            user_id: user("bob"),
            session_id: bob.connection_id,
        }]
    );
    assert_eq!(
        rig.registry.members_of(&room("r1"), &bob.connection_id),
        vec![alice.clone()]
    );
    assert!(rig.registry.session_of(&bob.connection_id).is_none());
}

#[test]
fn test_last_departure_evicts_room() {
    init_tracing();
    let rig = TestRig::new();
    let alice = rig.join("r1", "alice");
    let bob = rig.join("r1", "bob");

    rig.presence.on_leave(&alice.connection_id, &room("r1"));
    rig.presence.on_disconnect(&bob.connection_id);

    assert!(!rig.registry.contains_room(&room("r1")));
    assert_eq!(rig.registry.room_count(), 0);
}

#[test]
fn test_leave_for_other_room_is_ignored() {
    init_tracing();
    let rig = TestRig::new();
    let alice = rig.join("r1", "alice");
    let bob = rig.join("r1", "bob");
    rig.sink.clear();

    let change = rig.presence.on_leave(&alice.connection_id, &room("r2"));

    assert!(change.is_none());
    assert!(rig.sink.is_empty());
    assert_eq!(
        rig.registry.members_of(&room("r1"), &bob.connection_id),
        vec![alice]
    );
}
