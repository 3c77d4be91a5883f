mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let state = AppState::seeded();

    let listener = startup::bind_listener(&config).await?;

    tracing::info!(
        "Serving activities on {} (static files from {})",
        listener.local_addr()?,
        config.static_dir.display()
    );

    axum::serve(listener, router::app(&config, state))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
