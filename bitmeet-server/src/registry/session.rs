use bitmeet_core::{ConnectionId, RoomId, UserId};

/// A connection's membership in one room.
///
/// Board-only sessions (`join-board`) carry no user id and stay invisible to
/// presence notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub connection_id: ConnectionId,
    pub room_id: RoomId,
    pub user_id: Option<UserId>,
}

impl Session {
    pub fn new(connection_id: ConnectionId, room_id: RoomId, user_id: Option<UserId>) -> Self {
        Self {
            connection_id,
            room_id,
            user_id,
        }
    }
}
