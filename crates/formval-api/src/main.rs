//! # formval-api - Binary Entry Point
//!
//! Starts the Axum HTTP server for form validation.
//! Binds to configurable port (default 8080).

use formval_api::state::{AppConfig, AppState};
use formval_engine::{FormValidator, ReconcilePolicy};
use formval_provider_client::{FormProviderClient, FormProviderConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = AppConfig::from_env();

    // The provider URL is required; fail fast when it is missing.
    let provider_config = FormProviderConfig::from_env().map_err(|e| {
        tracing::error!("Form provider not configured: {e}");
        e
    })?;
    tracing::info!(provider = %provider_config.base_url, "form provider configured");
    let provider = FormProviderClient::new(provider_config).map_err(|e| {
        tracing::error!("Failed to create form provider client: {e}");
        e
    })?;

    let policy = ReconcilePolicy::from_env();
    tracing::info!(
        excluded_types = ?policy.excluded_types().collect::<Vec<_>>(),
        "reconcile policy loaded"
    );

    let state = AppState::new(FormValidator::with_policy(provider, policy), config.clone());
    let app = formval_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("formval API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Structured tracing; `FORMVAL_LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("FORMVAL_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
