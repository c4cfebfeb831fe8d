use axum::http::HeaderValue;
use std::net::{Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

/// Port the browser clients dial by default.
pub const DEFAULT_PORT: u16 = 5000;

pub const DEFAULT_WS_PATH: &str = "/ws";

/// Listener and HTTP surface settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub ws_path: String,
    /// Allowed CORS origins. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            ws_path: DEFAULT_WS_PATH.to_owned(),
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ws_path.starts_with('/') || self.ws_path == "/" {
            return Err(ConfigError::InvalidWsPath(self.ws_path.clone()));
        }
        self.origin_headers().map(|_| ())
    }

    pub(crate) fn origin_headers(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
            })
            .collect()
    }
}
