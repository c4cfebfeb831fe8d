mod room;
mod session;
mod session_registry;

pub(crate) use room::Room;
pub use room::RoomView;
pub use session::*;
pub use session_registry::*;
