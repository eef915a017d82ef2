//! # formval-api - Axum API Service
//!
//! HTTP front of the validation engine.
//!
//! ## Routes
//!
//! - `POST /v1/forms/{form_id}/validate` - validate a submission
//! - `/health/*` - Kubernetes health probes
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer → DefaultBodyLimit (2 MiB)
//!
//! ## Crate Policy
//!
//! - No validation logic in route handlers; they delegate to
//!   `formval-engine`.
//! - All errors map to structured HTTP responses via `AppError`.

pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::{AppConfig, AppState};

use axum::extract::DefaultBodyLimit;
use axum::Router;
use formval_core::FormProvider;
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Assemble the application router with all routes and middleware.
pub fn app<P: FormProvider + 'static>(state: AppState<P>) -> Router {
    let api = Router::new()
        .merge(routes::forms::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe - always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe - returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
