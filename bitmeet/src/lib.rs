pub use bitmeet_core::model::{ConnectionId, RoomId, UserId};

pub mod model {
    pub use bitmeet_core::model::*;
}

#[cfg(feature = "server")]
pub mod server {
    pub use bitmeet_server::*;
}
