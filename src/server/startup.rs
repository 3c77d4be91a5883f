use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Initializes the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` when set, otherwise `info` for everything. Safe to call
/// more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Binds the TCP listener on the configured host and port.
///
/// # Returns
/// - `Ok(TcpListener)` - Listener ready to be served
/// - `Err(AppError::IoErr)` - Address invalid or already in use
pub async fn bind_listener(config: &Config) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(config.bind_address()).await?;

    Ok(listener)
}

/// Resolves when the process receives Ctrl+C, triggering graceful shutdown.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
