use bitmeet_core::{ServerEvent, Signal};
use std::sync::Arc;
use tracing::debug;

use crate::registry::{Session, SessionRegistry};
use crate::relay::{FanOutReport, fan_out};
use crate::transport::EventSink;

/// Forwards offer/answer/ICE messages to the sender's room.
///
/// Knows nothing about negotiation state. Clients queue early candidates and
/// restart ICE on their own. Every other member receives the signal, which only
/// makes sense for two-party rooms; a third participant will see offers and
/// answers meant for someone else.
#[derive(Clone)]
pub struct SignalingRelay {
    registry: Arc<SessionRegistry>,
    sink: Arc<dyn EventSink>,
}

impl SignalingRelay {
    pub fn new(registry: Arc<SessionRegistry>, sink: Arc<dyn EventSink>) -> Self {
        Self { registry, sink }
    }

    pub fn relay(&self, sender: &Session, signal: Signal) -> FanOutReport {
        let kind = signal.kind();
        let event = ServerEvent::from(signal);

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
            "Relayed {} from {} in room {} to {} peer(s)",
            kind, sender.connection_id, sender.room_id, report.delivered
        );
        report
    }
}
