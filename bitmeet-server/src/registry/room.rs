use bitmeet_core::{ConnectionId, RoomId};
use std::collections::HashMap;

use crate::registry::Session;

/// Member set of one room. Only reachable through the registry, which keeps it
/// in step with the connection -> session index.
pub(crate) struct Room {
    id: RoomId,
    members: HashMap<ConnectionId, Session>,
}

impl Room {
    pub(crate) fn new(id: RoomId) -> Self {
        Self {
            id,
            members: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, session: Session) -> Option<Session> {
        debug_assert_eq!(session.room_id, self.id);
        self.members.insert(session.connection_id, session)
    }

    pub(crate) fn remove(&mut self, connection_id: &ConnectionId) -> Option<Session> {
        self.members.remove(connection_id)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Read-only view of a room, handed out while its registry entry is locked.
/// Anything done through it is ordered against every other join, leave and
/// fan-out in the same room.
pub struct RoomView<'a> {
    room: &'a Room,
}

impl<'a> RoomView<'a> {
    pub(crate) fn new(room: &'a Room) -> Self {
        Self { room }
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.room.members.contains_key(connection_id)
    }

    /// Every member except `except`.
    pub fn others(&self, except: &ConnectionId) -> impl Iterator<Item = &'a Session> {
        self.room
            .members
            .values()
            .filter(move |session| &session.connection_id != except)
    }

    #[cfg(test)]
    pub(crate) fn sessions(&self) -> impl Iterator<Item = &'a Session> {
        self.room.members.values()
    }
}
