
use std::sync::Arc;
use tracing::Level;

use bitmeet_core::{ConnectionId, RoomId, UserId};
use bitmeet_server::{
    EventSink, PresenceCoordinator, Session, SessionRegistry, SignalingRelay, StateBroadcaster,
};

use crate::utils::RecordingSink;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn room(id: &str) -> RoomId {
    RoomId::parse(id).expect("valid room id")
}

pub fn user(id: &str) -> UserId {
    UserId::parse(id).expect("valid user id")
}

/// The four core components wired to one registry and a recording sink.
pub struct TestRig {
    pub registry: Arc<SessionRegistry>,
    pub sink: RecordingSink,
    pub presence: PresenceCoordinator,
    pub signaling: SignalingRelay,
    pub broadcaster: StateBroadcaster,
}

impl TestRig {
    pub fn new() -> Self {
        let registry = Arc::new(SessionRegistry::new());
        let sink = RecordingSink::new();
        let shared: Arc<dyn EventSink> = Arc::new(sink.clone());

        Self {
            presence: PresenceCoordinator::new(registry.clone(), shared.clone()),
            signaling: SignalingRelay::new(registry.clone(), shared.clone()),
            broadcaster: StateBroadcaster::new(registry.clone(), shared),
            registry,
            sink,
        }
    }

    /// Fabricate a connection and join it as a participant.
    pub fn join(&self, room_id: &str, user_id: &str) -> Session {
        self.presence
            .on_join(ConnectionId::new(), room(room_id), Some(user(user_id)))
            .session
    }

    /// Fabricate a connection and join it as a board-only member.
    pub fn join_board(&self, room_id: &str) -> Session {
        self.presence
            .on_join(ConnectionId::new(), room(room_id), None)
            .session
    }
}
