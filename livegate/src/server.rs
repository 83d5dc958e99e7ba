use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::{error, info};

use livegate_core::{bootstrap::Services, Config};

/// HTTP front end of the resolution pipeline
pub struct LivegateServer {
    config: Config,
    services: Services,
}

impl LivegateServer {
    pub fn new(config: Config, services: Services) -> Self {
        Self { config, services }
    }

    /// Serve until a shutdown signal arrives
    pub async fn run(self) -> Result<()> {
        let http_addr = self.config.http_address();
        let router = livegate_api::create_router(self.services.live_stream_service.clone());

        let listener = tokio::net::TcpListener::bind(http_addr.as_str())
            .await
            .with_context(|| format!("Failed to bind HTTP address {http_addr}"))?;

        info!("HTTP server listening on {}", http_addr);

        // Peer addresses feed client IP resolution when no proxy header is present
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

        info!("HTTP server shut down gracefully");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl+C signal");
            }
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received SIGTERM signal");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
