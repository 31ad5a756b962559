//! Kala Studio - AI marketing backend for artisans
//!
//! Standalone dashboard server: generates stories, captions, listings and
//! heritage narratives through Gemini, and keeps every record in memory.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tower::limit::ConcurrencyLimitLayer;
use tracing::info;

use kala_studio::config::StudioConfig;
use kala_studio::gemini;
use kala_studio::handlers::{build_router, StudioState};
use kala_studio::metrics;
use kala_studio::middleware;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    metrics::register_metrics().expect("Failed to register metrics");
    info!("📊 Metrics registered at /metrics");

    info!("🏺 Starting Kala Studio server...");

    // Load configuration from environment
    let config = StudioConfig::from_env();
    config.log();

    let generator = gemini::create_generator(&config.gemini)?;

    let cors = config.cors.to_layer();
    let max_concurrent = config.max_concurrent_requests;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;

    let state = Arc::new(StudioState::new(config, generator));

    info!(
        "🔄 Concurrency limiting enabled: max_concurrent={}",
        max_concurrent
    );

    let app = build_router(state)
        .layer(axum::middleware::from_fn(middleware::track_metrics))
        .layer(ConcurrencyLimitLayer::new(max_concurrent))
        .layer(cors);

    info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run the server - it will wait until shutdown signal is received
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // Records live in memory only, so there is nothing to flush
    info!("👋 Server shutdown complete");

    Ok(())
}

/// Handle graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received, starting graceful shutdown");
}
