//! HTTP server lifecycle

use std::net::SocketAddr;

use axum::Router;
use qsearch_config::ServerConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::{routes::build_router, state::AppState};

/// qsearch HTTP server
pub struct ApiServer {
    router: Router,
    listen: SocketAddr,
}

impl ApiServer {
    /// Create a server over prepared state
    pub fn new(state: AppState, config: &ServerConfig) -> Self {
        Self {
            router: build_router(state, config.environment),
            listen: config.listen,
        }
    }

    /// Bind and serve until ctrl-c or SIGTERM
    pub async fn run(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.listen).await?;
        info!(addr = %listener.local_addr()?, "qsearch API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("qsearch API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
