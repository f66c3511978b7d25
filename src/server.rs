//! HTTP server initialization and runtime setup.
//!
//! Builds the lookup clients, wires them into the check service and runs the
//! Axum server until Ctrl+C / SIGTERM.

use crate::application::services::UrlCheckService;
use crate::config::Config;
use crate::domain::lookups::RegistrationLookup;
use crate::infrastructure::{SafeBrowsingClient, WhoisLookup};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed (e.g. TLS backend
/// initialisation fails).
pub fn build_state(config: &Config) -> Result<AppState> {
    let registrations = Arc::new(WhoisLookup::new(Duration::from_secs(
        config.whois_timeout_secs,
    )));

    build_state_with_registrations(config, registrations)
}

/// Builds the application state around a given registration lookup.
///
/// The threat client is always built from `config`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_state_with_registrations(
    config: &Config,
    registrations: Arc<dyn RegistrationLookup>,
) -> Result<AppState> {
    let http = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let threats = Arc::new(SafeBrowsingClient::new(
        http,
        config.safe_browsing_url.clone(),
        config.safe_browsing_api_key.clone(),
        config.safe_browsing_client_id.clone(),
    ));

    let service = UrlCheckService::new(threats, registrations);

    Ok(AppState::new(Arc::new(service)))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
