use bitmeet_core::ConnectionId;
use thiserror::Error;

/// Why a single outbound event could not be queued for a connection.
///
/// Always swallowed by the fan-out loops; it only ever reaches the logs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("connection {0} is not registered")]
    UnknownConnection(ConnectionId),

    #[error("connection {0} is closing")]
    Closed(ConnectionId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("websocket path must start with '/' and must not be the root path, got {0:?}")]
    InvalidWsPath(String),

    #[error("allowed origin {0:?} is not a valid header value")]
    InvalidOrigin(String),
}
