//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{short_code}` - Short link redirect
//! - `GET  /health`       - Health check
//! - `/api/urls*`         - URL management API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes and middleware, without path normalization.
pub fn build_router(state: AppState, request_timeout_seconds: u64) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/{short_code}", get(redirect_handler))
        .nest("/api", api::routes::url_routes())
        .with_state(state)
        .layer(timeout::layer(request_timeout_seconds))
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed, so
/// `/api/urls/` and `/api/urls` reach the same handler.
pub fn app_router(state: AppState, request_timeout_seconds: u64) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, request_timeout_seconds))
}
