use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::connection::ConnectionId;
use crate::model::room::RoomId;
use crate::model::signaling::Signal;
use crate::model::state::StateUpdate;
use crate::model::stroke::Stroke;
use crate::model::user::UserId;

/// Frames a browser client sends over its socket.
///
/// Wire shape: `{"event": "<kebab-name>", "data": <payload>}`. Payload fields
/// are camelCase; `meetId` is accepted wherever `roomId` is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientEvent {
    JoinRoom {
        #[serde(alias = "meetId")]
        room_id: RoomId,
        user_id: UserId,
    },
    LeaveRoom {
        #[serde(alias = "meetId")]
        room_id: RoomId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user_id: Option<UserId>,
    },
    WebrtcOffer {
        #[serde(alias = "meetId")]
        room_id: RoomId,
        offer: Value,
    },
    WebrtcAnswer {
        #[serde(alias = "meetId")]
        room_id: RoomId,
        answer: Value,
    },
    WebrtcIceCandidate {
        #[serde(alias = "meetId")]
        room_id: RoomId,
        candidate: Value,
    },
    CodeChange {
        #[serde(alias = "meetId")]
        room_id: RoomId,
        code: String,
    },
    InputChange {
        #[serde(alias = "meetId")]
        room_id: RoomId,
        input: String,
    },
    OutputChange {
        #[serde(alias = "meetId")]
        room_id: RoomId,
        output: String,
    },
    JoinBoard(RoomId),
    Stroke {
        #[serde(alias = "meetId")]
        room_id: RoomId,
        stroke: Stroke,
    },
}

impl ClientEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::JoinRoom { .. } => "join-room",
            ClientEvent::LeaveRoom { .. } => "leave-room",
            ClientEvent::WebrtcOffer { .. } => "webrtc-offer",
            ClientEvent::WebrtcAnswer { .. } => "webrtc-answer",
            ClientEvent::WebrtcIceCandidate { .. } => "webrtc-ice-candidate",
            ClientEvent::CodeChange { .. } => "code-change",
            ClientEvent::InputChange { .. } => "input-change",
            ClientEvent::OutputChange { .. } => "output-change",
            ClientEvent::JoinBoard(_) => "join-board",
            ClientEvent::Stroke { .. } => "stroke",
        }
    }
}

/// Frames the relay pushes to a client. Relay events carry the sender's
/// payload as-is, without the room id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    UserJoined {
        user_id: UserId,
        session_id: ConnectionId,
    },
    UserLeft {
        user_id: UserId,
        session_id: ConnectionId,
    },
    WebrtcOffer(Value),
    WebrtcAnswer(Value),
    WebrtcIceCandidate(Value),
    CodeUpdate(String),
    InputUpdate(String),
    OutputUpdate(String),
    Stroke(Stroke),
}

impl ServerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::UserJoined { .. } => "user-joined",
            ServerEvent::UserLeft { .. } => "user-left",
            ServerEvent::WebrtcOffer(_) => "webrtc-offer",
            ServerEvent::WebrtcAnswer(_) => "webrtc-answer",
            ServerEvent::WebrtcIceCandidate(_) => "webrtc-ice-candidate",
            ServerEvent::CodeUpdate(_) => "code-update",
            ServerEvent::InputUpdate(_) => "input-update",
            ServerEvent::OutputUpdate(_) => "output-update",
            ServerEvent::Stroke(_) => "stroke",
        }
    }
}

impl From<Signal> for ServerEvent {
    fn from(signal: Signal) -> Self {
        match signal {
            Signal::Offer(offer) => ServerEvent::WebrtcOffer(offer),
            Signal::Answer(answer) => ServerEvent::WebrtcAnswer(answer),
            Signal::IceCandidate(candidate) => ServerEvent::WebrtcIceCandidate(candidate),
        }
    }
}

impl From<StateUpdate> for ServerEvent {
    fn from(update: StateUpdate) -> Self {
        match update {
            StateUpdate::Code(code) => ServerEvent::CodeUpdate(code),
            StateUpdate::Input(input) => ServerEvent::InputUpdate(input),
            StateUpdate::Output(output) => ServerEvent::OutputUpdate(output),
            StateUpdate::Stroke(stroke) => ServerEvent::Stroke(stroke),
        }
    }
}
