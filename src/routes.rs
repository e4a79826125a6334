//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`   - Short link redirect, constrained to the code pattern
//!   inside the handler so the catch-all segment never turns arbitrary paths
//!   into store lookups
//! - `GET  /healthz`  - Liveness check
//! - `/api/*`         - Link management REST API
//! - anything else    - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash trimming

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/healthz", get(health_handler))
        .nest("/api", api::routes::link_routes())
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// JSON body for any route no other handler claims, `/api/*` misses included.
async fn fallback_handler() -> AppError {
    AppError::not_found("Not found", json!({}))
}
