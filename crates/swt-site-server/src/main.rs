//! SWT site server entry point.
//!
//! Loads configuration, builds the shared state (pattern table and contact
//! pipeline), then serves the landing page with graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use swt_site_server::app::build_router;
use swt_site_server::config::SiteConfig;
use swt_site_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SiteConfig::from_env();

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(site_url = %config.site_url, "SWT site starting");

    let state = Arc::new(
        AppState::from_config(&config).context("failed to build highlighting rules")?,
    );

    if state.contact.is_mock() {
        warn!(
            delay_ms = u64::try_from(config.mock_delay.as_millis()).unwrap_or(u64::MAX),
            "RESEND_API_KEY not set, contact form running in mock mode"
        );
    } else {
        info!(api = %config.resend_api_url, "contact form delivering through Resend");
    }

    let app = build_router(state, &config.public_dir);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "SWT site listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("SWT site stopped");
    Ok(())
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
