use bitmeet_core::{ServerEvent, StateUpdate};
use std::sync::Arc;
use tracing::debug;

use crate::registry::{Session, SessionRegistry};
use crate::relay::{FanOutReport, fan_out};
use crate::transport::EventSink;

/// Pushes editor, stdin/stdout and whiteboard updates to the rest of a room.
///
/// Stateless: no copy of the code buffer or canvas is kept, so a late joiner
/// starts blank and concurrent writers interleave at the receivers.
#[derive(Clone)]
pub struct StateBroadcaster {
    registry: Arc<SessionRegistry>,
    sink: Arc<dyn EventSink>,
}

impl StateBroadcaster {
    pub fn new(registry: Arc<SessionRegistry>, sink: Arc<dyn EventSink>) -> Self {
        Self { registry, sink }
    }

    pub fn broadcast(&self, sender: &Session, update: StateUpdate) -> FanOutReport {
        let kind = update.kind();
        if let StateUpdate::Stroke(stroke) = &update {
            debug!(
                "Stroke from {} carries {} point(s)",
                sender.connection_id,
                stroke.points().len()
            );
        }
        let event = ServerEvent::from(update);

        let report = self
            .registry
            .with_room(&sender.room_id, |room| {
                if !room.contains(&sender.connection_id) {
                    return FanOutReport::default();
                }
                fan_out(self.sink.as_ref(), &room, sender, &event)
            })
            .unwrap_or_default();

        debug!(
            "Broadcast {} update from {} in room {} to {} peer(s)",
            kind, sender.connection_id, sender.room_id, report.delivered
        );
        report
    }
}
