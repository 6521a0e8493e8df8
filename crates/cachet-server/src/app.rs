//! Application builder.

use crate::router::create_router;
use crate::startup::print_startup_info;
use crate::state::AppState;
use cachet_cache::{connect, CacheClient};
use cachet_config::AppConfig;
use cachet_core::{CachetError, CachetResult};
use tokio::signal;
use tracing::info;

/// Application builder for constructing the server.
pub struct AppBuilder {
    config: Option<AppConfig>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Connects to the store and builds the shared handler state.
    ///
    /// Fails if the liveness probe does not pass; no listener is opened in
    /// that case.
    pub async fn bootstrap(&self) -> CachetResult<AppState> {
        let config = self.config.clone().unwrap_or_default();
        let handle = connect(&config.redis).await?;
        Ok(AppState::new(CacheClient::from_handle(handle), &config.cache))
    }

    /// Builds and runs the application until a shutdown signal arrives.
    pub async fn run(self) -> CachetResult<()> {
        let state = self.bootstrap().await?;
        let config = self.config.unwrap_or_default();

        let router = create_router(state);
        let addr = config.server.addr();

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| CachetError::internal(format!("Failed to bind {}: {}", addr, e)))?;

        print_startup_info(&addr, config.redis.database);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| CachetError::internal(format!("HTTP server error: {}", e)))?;

        info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
