//! # Application State
//!
//! Shared state for the Axum application, passed to route handlers via the
//! `State` extractor. The validator holds no per-request data, so one
//! instance behind an `Arc` serves every request.

use std::sync::Arc;

use formval_core::FormProvider;
use formval_engine::FormValidator;

/// Runtime configuration of the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

impl AppConfig {
    /// Read `PORT` (default 8080).
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        Self { port }
    }
}

/// State shared by all handlers.
pub struct AppState<P> {
    pub validator: Arc<FormValidator<P>>,
    pub config: AppConfig,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
            config: self.config.clone(),
        }
    }
}

impl<P: FormProvider> AppState<P> {
    pub fn new(validator: FormValidator<P>, config: AppConfig) -> Self {
        Self {
            validator: Arc::new(validator),
            config,
        }
    }
}
