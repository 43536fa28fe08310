pub mod app;
pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::ServerConfig;
use crate::data_source::{FoodBankSource, GiveFoodClient};

/// A running server. Dropping the handle leaves the server running; call
/// [`ServerHandle::shutdown`] to stop it.
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<Result<()>>,
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections and wait for in-flight requests to finish.
    pub async fn shutdown(self) -> Result<()> {
        info!("Shutting down server on {}", self.local_addr);
        // The receiver is gone if the server already exited; wait() reports why
        let _ = self.shutdown_tx.send(());
        join(self.handle).await
    }

    /// Wait until the server exits on its own.
    pub async fn wait(self) -> Result<()> {
        join(self.handle).await
    }
}

async fn join(handle: JoinHandle<Result<()>>) -> Result<()> {
    handle
        .await
        .map_err(|e| anyhow!("Server task failed: {}", e))?
}

/// Start the server against the Give Food API named in the configuration.
pub async fn start_server(config: &ServerConfig) -> Result<ServerHandle> {
    let client = GiveFoodClient::new(&config.givefood_base_url, config.request_timeout())?;
    info!("Using Give Food API at {}", client.base_url());

    start_with_source(Arc::new(client), config).await
}

/// Start the server with an explicit data source.
pub async fn start_with_source(
    source: Arc<dyn FoodBankSource>,
    config: &ServerConfig,
) -> Result<ServerHandle> {
    let app = app::create_app(source, &config.app_options())?;

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| anyhow!("Failed to bind {}:{}: {}", config.host, config.port, e))?;
    let local_addr = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .map_err(|e| anyhow!("Server error: {}", e))
    });

    info!("Server running on http://{}", local_addr);
    log_routes(config.playground);

    Ok(ServerHandle {
        local_addr,
        shutdown_tx,
        handle,
    })
}

fn log_routes(playground: bool) {
    info!("API Endpoints:");
    info!("  /health                     - Health check");
    info!("  /graphql                    - GraphQL API (GET, POST)");
    if playground {
        info!("  /                           - GraphQL Playground");
    }
}
