use std::sync::Arc;

use anyhow::Context;
use filehost_server::{AppState, ServerConfig};
use filehost_storage::ResourceController;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    info!("starting filehost server");
    let config = ServerConfig::load().context("failed to load server config")?;

    let controller = ResourceController::new(&config.root).with_context(|| {
        format!("failed to open root directory: {}", config.root.display())
    })?;
    info!(root = %controller.root().display(), "serving directory");

    let mut router = filehost_server::app(Arc::new(AppState::new(controller)));
    if config.cors {
        info!("CORS enabled");
        router = router.layer(CorsLayer::permissive());
    }

    let listener = tokio::net::TcpListener::bind(&config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    info!(listen = %config.listen, "server is ready, press Ctrl+C to shut down");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, stopping server");
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
