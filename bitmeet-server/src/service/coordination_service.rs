use bitmeet_core::{ClientEvent, ConnectionId, RoomId, ServerEvent, Signal, StateUpdate, UserId};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::presence::PresenceCoordinator;
use crate::registry::{Session, SessionRegistry};
use crate::relay::{SignalingRelay, StateBroadcaster};
use crate::transport::{ConnectionTable, EventSink};

struct CoordinationInner {
    registry: Arc<SessionRegistry>,
    connections: Arc<ConnectionTable>,
    presence: PresenceCoordinator,
    signaling: SignalingRelay,
    broadcaster: StateBroadcaster,
}

/// Owns the registries and routes every inbound event. One instance per
/// process, cloned into the accept loop.
///
/// Nothing here ever answers the sender: there are no acks, no error frames,
/// and malformed or misdirected input simply has no effect.
#[derive(Clone)]
pub struct CoordinationService {
    inner: Arc<CoordinationInner>,
}

impl Default for CoordinationService {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinationService {
    pub fn new() -> Self {
        let registry = Arc::new(SessionRegistry::new());
        let connections = Arc::new(ConnectionTable::new());
        let sink: Arc<dyn EventSink> = connections.clone();

        Self {
            inner: Arc::new(CoordinationInner {
                presence: PresenceCoordinator::new(registry.clone(), sink.clone()),
                signaling: SignalingRelay::new(registry.clone(), sink.clone()),
                broadcaster: StateBroadcaster::new(registry.clone(), sink),
                registry,
                connections,
            }),
        }
    }

    /// Accept a new connection. The receiver yields everything relayed to it.
    pub fn connect(&self) -> (ConnectionId, mpsc::UnboundedReceiver<ServerEvent>) {
        let (connection_id, rx) = self.inner.connections.open();
        info!("Connection {} accepted", connection_id);
        (connection_id, rx)
    }

    /// Decode one text frame and dispatch it. Undecodable frames are dropped.
    pub fn handle_text(&self, connection_id: ConnectionId, text: &str) {
        match serde_json::from_str::<ClientEvent>(text) {
            Ok(event) => self.handle(connection_id, event),
            Err(e) => warn!("Invalid frame from {}: {}", connection_id, e),
        }
    }

    pub fn handle(&self, connection_id: ConnectionId, event: ClientEvent) {
        let inner = &self.inner;
        if !inner.connections.contains(&connection_id) {
            debug!("Dropping {} from closed connection {}", event.name(), connection_id);
            return;
        }

        match event {
            ClientEvent::JoinRoom { room_id, user_id } => {
                self.join(connection_id, room_id, Some(user_id));
            }
            ClientEvent::JoinBoard(room_id) => {
                let already_member = inner
                    .registry
                    .session_of(&connection_id)
                    .is_some_and(|session| session.room_id == room_id);
                if already_member {
                    debug!("Connection {} already in room {}", connection_id, room_id);
                    return;
                }
                self.join(connection_id, room_id, None);
            }
            ClientEvent::LeaveRoom { room_id, .. } => {
                inner.presence.on_leave(&connection_id, &room_id);
            }
            ClientEvent::WebrtcOffer { room_id, offer } => {
                self.relay_signal(connection_id, &room_id, Signal::Offer(offer));
            }
            ClientEvent::WebrtcAnswer { room_id, answer } => {
                self.relay_signal(connection_id, &room_id, Signal::Answer(answer));
            }
            ClientEvent::WebrtcIceCandidate { room_id, candidate } => {
                self.relay_signal(connection_id, &room_id, Signal::IceCandidate(candidate));
            }
            ClientEvent::CodeChange { room_id, code } => {
                self.broadcast_state(connection_id, &room_id, StateUpdate::Code(code));
            }
            ClientEvent::InputChange { room_id, input } => {
                self.broadcast_state(connection_id, &room_id, StateUpdate::Input(input));
            }
            ClientEvent::OutputChange { room_id, output } => {
                self.broadcast_state(connection_id, &room_id, StateUpdate::Output(output));
            }
            ClientEvent::Stroke { room_id, stroke } => {
                self.broadcast_state(connection_id, &room_id, StateUpdate::Stroke(stroke));
            }
        }
    }

    /// Transport-level close. Safe to call more than once.
    ///
    /// The connection is unregistered before its session is torn down, so a
    /// join racing with the close either lands first and is cleaned up here,
    /// or sees the closed connection and undoes itself.
    pub fn disconnect(&self, connection_id: ConnectionId) {
        let was_open = self.inner.connections.close(&connection_id);
        self.inner.presence.on_disconnect(&connection_id);
        if was_open {
            info!("Connection {} closed", connection_id);
        }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.inner.registry
    }

    pub fn connection_count(&self) -> usize {
        self.inner.connections.len()
    }

    fn join(&self, connection_id: ConnectionId, room_id: RoomId, user_id: Option<UserId>) {
        self.inner.presence.on_join(connection_id, room_id, user_id);
        if !self.inner.connections.contains(&connection_id) {
            debug!("Connection {} closed while joining, rolling back", connection_id);
            self.inner.presence.on_disconnect(&connection_id);
        }
    }

    fn relay_signal(&self, connection_id: ConnectionId, room_id: &RoomId, signal: Signal) {
        let Some(sender) = self.sender_in(connection_id, room_id, signal.kind()) else {
            return;
        };
        self.inner.signaling.relay(&sender, signal);
    }

    fn broadcast_state(&self, connection_id: ConnectionId, room_id: &RoomId, update: StateUpdate) {
        let Some(sender) = self.sender_in(connection_id, room_id, update.kind()) else {
            return;
        };
        self.inner.broadcaster.broadcast(&sender, update);
    }

    /// The sender's session, provided it is a member of the room it addressed.
    fn sender_in(&self, connection_id: ConnectionId, room_id: &RoomId, kind: &str) -> Option<Session> {
        let Some(session) = self.inner.registry.session_of(&connection_id) else {
            debug!("Dropping {} from {}: not in a room", kind, connection_id);
            return None;
        };
        if &session.room_id != room_id {
            warn!(
                "Dropping {} from {}: addressed room {} but member of {}",
                kind, connection_id, room_id, session.room_id
            );
            return None;
        }
        Some(session)
    }
}
