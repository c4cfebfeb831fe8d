use bitmeet_core::{ConnectionId, ServerEvent};
use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::DeliveryError;
use crate::transport::EventSink;

/// Outbound queues of every live connection, keyed by connection id.
#[derive(Default)]
pub struct ConnectionTable {
    connections: DashMap<ConnectionId, mpsc::UnboundedSender<ServerEvent>>,
}

impl ConnectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new connection and hand back the receiving end of its queue.
    pub fn open(&self) -> (ConnectionId, mpsc::UnboundedReceiver<ServerEvent>) {
        let connection_id = ConnectionId::new();
        let (tx, rx) = mpsc::unbounded_channel();
        self.connections.insert(connection_id, tx);
        debug!("Connection {} opened", connection_id);
        (connection_id, rx)
    }

    /// Returns false if the connection was already gone.
    pub fn close(&self, connection_id: &ConnectionId) -> bool {
        self.connections.remove(connection_id).is_some()
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.connections.contains_key(connection_id)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl EventSink for ConnectionTable {
    fn deliver(&self, to: &ConnectionId, event: ServerEvent) -> Result<(), DeliveryError> {
        let Some(tx) = self.connections.get(to) else {
            return Err(DeliveryError::UnknownConnection(*to));
        };
        tx.send(event).map_err(|_| DeliveryError::Closed(*to))
    }
}
