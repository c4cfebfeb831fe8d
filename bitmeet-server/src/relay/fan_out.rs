use bitmeet_core::ServerEvent;
use tracing::debug;

use crate::registry::{RoomView, Session};
use crate::transport::EventSink;

/// Outcome of one fan-out. Internal bookkeeping only: it is logged and
/// inspected by tests, never sent back to the originating connection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FanOutReport {
    pub delivered: usize,
    pub dropped: usize,
}

impl FanOutReport {
    pub fn targets(&self) -> usize {
        self.delivered + self.dropped
    }
}

/// Deliver `event` to every member of `room` except `from`.
///
/// A target that cannot be reached is skipped; the rest still get the event.
pub(crate) fn fan_out(
    sink: &dyn EventSink,
    room: &RoomView<'_>,
    from: &Session,
    event: &ServerEvent,
) -> FanOutReport {
    let mut report = FanOutReport::default();

    for target in room.others(&from.connection_id) {
        match sink.deliver(&target.connection_id, event.clone()) {
            Ok(()) => report.delivered += 1,
            Err(e) => {
                report.dropped += 1;
                debug!("Dropped {} for {}: {}", event.name(), target.connection_id, e);
            }
        }
    }

    report
}
