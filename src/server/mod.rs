//! Page server: serves the pantry page and a small JSON API over one
//! in-memory [`Pantry`].
//!
//! ```no_run
//! use mypantry::server::Server;
//!
//! #[tokio::main]
//! async fn main() -> mypantry::Result<()> {
//!     Server::builder().port(8080).build().run().await
//! }
//! ```

pub mod handlers;
pub mod router;
pub mod view;

use crate::config::AppConfig;
use crate::core::pantry::Pantry;
use crate::core::ConfigProvider;
use crate::utils::error::{PantryError, Result};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

/// Shared by every handler. Cloning shares the same pantry.
#[derive(Debug, Clone)]
pub struct AppState {
    pub pantry: Pantry,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let pantry = Pantry::new(config.removal_delay(), config.default_quantity());
        Self { pantry, config }
    }
}

/// Builds the router for a given state; handy for driving requests in tests.
pub fn app(state: AppState) -> Router {
    router::init(state)
}

#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: AppConfig,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: AppConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.port = port;
        self
    }

    pub fn build(self) -> Server {
        Server {
            state: AppState::new(self.cfg),
        }
    }
}

#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: AppState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Binds the configured address and serves until Ctrl+C or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let config = &self.state.config;
        let address = SocketAddr::new(config.address(), config.port());
        let listener = TcpListener::bind(address)
            .await
            .map_err(|source| PantryError::BindError {
                address: address.to_string(),
                source,
            })?;

        info!(
            address = %address,
            removal_delay_ms = self.state.pantry.removal_delay().as_millis() as u64,
            "Starting pantry server on http://{address}"
        );

        self.serve(listener).await
    }

    /// Serves on an already bound listener.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let app = router::init(self.state);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                if let Err(e) = shutdown_signal().await {
                    error!("Error while waiting for shutdown signal: {e}");
                    std::future::pending::<()>().await;
                }
                info!("Shutdown signal received, starting graceful shutdown...");
            })
            .await
            .map_err(|e| PantryError::ServerError {
                message: e.to_string(),
            })?;

        info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() -> std::io::Result<()> {
    let ctrl_c = signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())?
            .recv()
            .await;
        Ok::<_, std::io::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<std::io::Result<()>>();

    tokio::select! {
        res = ctrl_c => res,
        res = terminate => res,
    }
}
