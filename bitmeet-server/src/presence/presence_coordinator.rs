use bitmeet_core::{ConnectionId, RoomId, ServerEvent, UserId};
use std::sync::Arc;
use tracing::{debug, info};

use crate::registry::{Session, SessionRegistry};
use crate::relay::{FanOutReport, fan_out};
use crate::transport::EventSink;

/// A membership change together with how many peers heard about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceChange {
    pub session: Session,
    pub notified: FanOutReport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Departure {
    Left,
    Disconnected,
    Replaced,
}

impl Departure {
    fn as_str(self) -> &'static str {
        match self {
            Departure::Left => "left",
            Departure::Disconnected => "disconnected from",
            Departure::Replaced => "switched away from",
        }
    }
}

/// Announces joins and departures and drives the registry cleanup.
///
/// Notifications go out inside the room's critical section, so a peer always
/// hears `user-joined` for a session before its `user-left`. Board-only
/// sessions join and leave silently.
#[derive(Clone)]
pub struct PresenceCoordinator {
    registry: Arc<SessionRegistry>,
    sink: Arc<dyn EventSink>,
}

impl PresenceCoordinator {
    pub fn new(registry: Arc<SessionRegistry>, sink: Arc<dyn EventSink>) -> Self {
        Self { registry, sink }
    }

    /// Register the connection in `room_id` and tell the other members.
    ///
    /// A connection that already holds a session leaves it first, with the
    /// usual `user-left` to its old room.
    pub fn on_join(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        user_id: Option<UserId>,
    ) -> PresenceChange {
        if self.registry.session_of(&connection_id).is_some() {
            self.depart(&connection_id, Departure::Replaced);
        }

        let mut notified = FanOutReport::default();
        let outcome = self
            .registry
            .join_with(connection_id, room_id, user_id, |session, room| {
                let Some(user_id) = &session.user_id else {
                    return;
                };
                let event = ServerEvent::UserJoined {
                    user_id: user_id.clone(),
                    session_id: session.connection_id,
                };
                notified = fan_out(self.sink.as_ref(), &room, session, &event);
            });

        match &outcome.session.user_id {
            Some(user_id) => info!(
                "User {} ({}) joined room {}, {} peer(s) notified",
                user_id, connection_id, outcome.session.room_id, notified.delivered
            ),
            None => info!(
                "Board connection {} joined room {}",
                connection_id, outcome.session.room_id
            ),
        }

        PresenceChange {
            session: outcome.session,
            notified,
        }
    }

    /// Explicit leave. Ignored unless the connection is currently in `room_id`.
    pub fn on_leave(&self, connection_id: &ConnectionId, room_id: &RoomId) -> Option<PresenceChange> {
        let current = self.registry.session_of(connection_id)?;
        if &current.room_id != room_id {
            debug!(
                "Connection {} asked to leave room {} but is in {}",
                connection_id, room_id, current.room_id
            );
            return None;
        }
        self.depart(connection_id, Departure::Left)
    }

    /// Transport-level loss of the connection. No-op if it held no session.
    pub fn on_disconnect(&self, connection_id: &ConnectionId) -> Option<PresenceChange> {
        self.depart(connection_id, Departure::Disconnected)
    }

    fn depart(&self, connection_id: &ConnectionId, departure: Departure) -> Option<PresenceChange> {
        let mut notified = FanOutReport::default();
        let session = self.registry.leave_with(connection_id, |session, room| {
            let Some(user_id) = &session.user_id else {
                return;
            };
            let event = ServerEvent::UserLeft {
                user_id: user_id.clone(),
                session_id: session.connection_id,
            };
            notified = fan_out(self.sink.as_ref(), &room, session, &event);
        })?;

        info!(
            "Connection {} {} room {}, {} peer(s) notified",
            connection_id,
            departure.as_str(),
            session.room_id,
            notified.delivered
        );

        Some(PresenceChange { session, notified })
    }
}
