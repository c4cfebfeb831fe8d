use bitmeet_core::{ConnectionId, RoomId, UserId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{info, warn};

use crate::registry::{Room, RoomView, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    pub session: Session,
    /// The session this connection held before, if any. It has already been
    /// removed from its room when the outcome is returned.
    pub replaced: Option<Session>,
}

/// Connection -> session index plus room -> members map.
///
/// Each room entry is the critical section for that room: membership changes
/// and the callbacks passed to `join_with`, `leave_with` and `with_room` run
/// under the same entry lock. Callbacks must not call back into the registry.
#[derive(Default)]
pub struct SessionRegistry {
    rooms: DashMap<RoomId, Room>,
    sessions: DashMap<ConnectionId, Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        user_id: Option<UserId>,
    ) -> JoinOutcome {
        self.join_with(connection_id, room_id, user_id, |_, _| {})
    }

    /// Bind `connection_id` to `room_id`, creating the room on first join.
    /// A session the connection already held is removed first.
    ///
    /// `on_joined` sees the room with the new member already inserted.
    pub fn join_with<F>(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        user_id: Option<UserId>,
        on_joined: F,
    ) -> JoinOutcome
    where
        F: FnOnce(&Session, RoomView<'_>),
    {
        let replaced = self.leave(&connection_id);
        let session = Session::new(connection_id, room_id.clone(), user_id);

        let mut room = self.rooms.entry(room_id.clone()).or_insert_with(|| {
            info!("Creating room {}", room_id);
            Room::new(room_id.clone())
        });
        room.insert(session.clone());
        self.sessions.insert(connection_id, session.clone());

        on_joined(&session, RoomView::new(&room));
        drop(room);

        JoinOutcome { session, replaced }
    }

    pub fn leave(&self, connection_id: &ConnectionId) -> Option<Session> {
        self.leave_with(connection_id, |_, _| {})
    }

    /// Remove the connection's session, evicting its room once empty.
    /// Returns `None` (and skips `on_left`) if there was nothing to leave.
    ///
    /// `on_left` sees the remaining members only.
    pub fn leave_with<F>(&self, connection_id: &ConnectionId, on_left: F) -> Option<Session>
    where
        F: FnOnce(&Session, RoomView<'_>),
    {
        let session = self
            .sessions
            .get(connection_id)
            .map(|entry| entry.value().clone())?;

        match self.rooms.entry(session.room_id.clone()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().remove(connection_id);
                self.sessions.remove(connection_id);

                on_left(&session, RoomView::new(entry.get()));

                if entry.get().is_empty() {
                    entry.remove();
                    info!("Room {} is empty, evicted", session.room_id);
                }
            }
            Entry::Vacant(_) => {
                warn!(
                    "Session of {} points at missing room {}",
                    connection_id, session.room_id
                );
                self.sessions.remove(connection_id);
            }
        }

        Some(session)
    }

    pub fn session_of(&self, connection_id: &ConnectionId) -> Option<Session> {
        self.sessions
            .get(connection_id)
            .map(|entry| entry.value().clone())
    }

    /// Snapshot of the room's members other than `except`.
    pub fn members_of(&self, room_id: &RoomId, except: &ConnectionId) -> Vec<Session> {
        self.with_room(room_id, |room| room.others(except).cloned().collect())
            .unwrap_or_default()
    }

    /// Run `f` with the room locked. `None` if the room does not exist.
    pub fn with_room<R, F>(&self, room_id: &RoomId, f: F) -> Option<R>
    where
        F: FnOnce(RoomView<'_>) -> R,
    {
        let room = self.rooms.get(room_id)?;
        Some(f(RoomView::new(&room)))
    }

    pub fn contains_room(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
