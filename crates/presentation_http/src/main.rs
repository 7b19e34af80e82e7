//! Service broker HTTP server
//!
//! Main entry point for the broker API server.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::ports::CatalogSource;
use infrastructure::{AppConfig, InMemoryBroker, SecurityValidator, StaticCatalog, init_tracing};
use presentation_http::{AppState, BasicAuthLayer, routes};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config.telemetry.log_filter, config.server.log_format)
        .context("failed to initialize tracing")?;

    info!(version = env!("CARGO_PKG_VERSION"), "Service broker starting");

    let findings = SecurityValidator::validate(&config);
    SecurityValidator::log_findings(&findings);
    if SecurityValidator::should_block_startup(&config, &findings) {
        anyhow::bail!("refusing to start with insecure configuration; see the errors above");
    }

    let catalog = match &config.catalog.path {
        Some(path) => StaticCatalog::from_file(path)?,
        None => {
            warn!("No catalog file configured, serving an empty catalog");
            StaticCatalog::default()
        },
    };
    let catalog: Arc<dyn CatalogSource> = Arc::new(catalog);
    let broker = Arc::new(InMemoryBroker::from_config(&config.broker));
    let state = AppState::from_broker(catalog, broker);

    let auth_layer = BasicAuthLayer::from_config(&config.security);
    let app = routes::create_router(state, auth_layer, config.server.max_body_size_bytes)
        .layer(TraceLayer::new_for_http());

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, environment = %config.environment.unwrap_or_default(), "Server listening");

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }

    info!(?timeout, "Waiting for in-flight requests to finish");

    // Force the process down if draining takes longer than allowed
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        tracing::error!("Graceful shutdown timed out, exiting");
        std::process::exit(1);
    });
}
