mod connection;
mod error;
mod event;
mod room;
mod signaling;
mod state;
mod stroke;
mod user;

pub use connection::ConnectionId;
pub use error::ModelError;
pub use event::{ClientEvent, ServerEvent};
pub use room::RoomId;
pub use signaling::Signal;
pub use state::StateUpdate;
pub use stroke::Stroke;
pub use user::UserId;
