use anyhow::{Context, Result};
use bitmeet_server::{CoordinationService, ServerConfig, router};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

/// Timeout for a single expected event (ms).
pub const EVENT_TIMEOUT_MS: u64 = 2000;

/// How long to listen before concluding that nothing was delivered (ms).
pub const SILENCE_WINDOW_MS: u64 = 200;

/// Timeout for registry state to settle after a socket operation (ms).
pub const SETTLE_TIMEOUT_MS: u64 = 2000;

/// Poll `condition` until it holds or `timeout_ms` passes.
pub async fn wait_until<F>(timeout_ms: u64, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let start = Instant::now();
    let timeout = Duration::from_millis(timeout_ms);

    loop {
        if condition() {
            return true;
        }
        if start.elapsed() > timeout {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Serve a fresh relay on an ephemeral localhost port.
pub async fn spawn_test_server() -> Result<(SocketAddr, CoordinationService)> {
    let service = CoordinationService::new();
    let config = ServerConfig {
        bind: SocketAddr::from(([127, 0, 0, 1], 0)),
        ..ServerConfig::default()
    };
    let app = router(service.clone(), &config).context("Invalid test config")?;

    let listener = TcpListener::bind(config.bind)
        .await
        .context("Failed to bind test listener")?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Test server stopped: {}", e);
        }
    });

    Ok((addr, service))
}
