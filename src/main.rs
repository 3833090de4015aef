use std::sync::Arc;

use anyhow::Result;
use uuid_service::{app, config::Config, generator::RandomGenerator, types::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    let app_state = AppState {
        version: env!("CARGO_PKG_VERSION").to_string(),
        generator: Arc::new(RandomGenerator),
    };

    // build our application with a route
    let app = app::build_router(app_state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    // Wait for the CTRL+C signal
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
    tracing::info!("signal received, starting graceful shutdown");
}
