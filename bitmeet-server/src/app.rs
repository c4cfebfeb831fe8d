use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::ConfigError;
use crate::service::CoordinationService;
use crate::transport::ws_handler;

pub const LIVENESS_BANNER: &str = "BitMeet relay is running";

/// HTTP surface: liveness banner on `/`, WebSocket upgrade on `ws_path`.
pub fn router(service: CoordinationService, config: &ServerConfig) -> Result<Router, ConfigError> {
    config.validate()?;

    let origins = config.origin_headers()?;
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/", get(liveness))
        .route(&config.ws_path, get(ws_handler))
        .layer(cors)
        .with_state(service))
}

async fn liveness() -> &'static str {
    LIVENESS_BANNER
}

/// Bind, serve until Ctrl-C/SIGTERM, then drain.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let service = CoordinationService::new();
    let app = router(service, &config).context("invalid server configuration")?;

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(
        "Relay listening on http://{} (websocket path {})",
        listener.local_addr().unwrap_or(config.bind),
        config.ws_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("Relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
