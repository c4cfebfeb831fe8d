use bitmeet_core::{ConnectionId, ServerEvent};

use crate::error::DeliveryError;

/// Outbound side of the transport. Registry components push events through
/// this without knowing what kind of socket sits behind a connection id.
///
/// Implementations must not block: `deliver` is called while a room's
/// registry entry is locked.
pub trait EventSink: Send + Sync {
    /// Queue one event for one connection. Fire-and-forget: there is no
    /// acknowledgement and the caller never reports the outcome to the sender.
    fn deliver(&self, to: &ConnectionId, event: ServerEvent) -> Result<(), DeliveryError>;
}
