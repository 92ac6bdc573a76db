//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /receipts/process`     - Score and store a receipt (rate limited)
//! - `GET  /receipts/{id}/points` - Points lookup (rate limited)
//! - `GET  /health`               - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on receipt routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit settings in `config` are invalid.
pub fn app_router(state: AppState, config: &Config) -> anyhow::Result<NormalizePath<Router>> {
    let receipt_router = api::routes::receipt_routes().layer(rate_limit::layer(
        config.rate_limit_replenish_ms,
        config.rate_limit_burst,
    )?);

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(receipt_router)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
