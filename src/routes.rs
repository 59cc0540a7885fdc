//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`            - Redirect to the dashboard
//! - `GET /healthz`     - Machine-readable frontend liveness
//! - `/dashboard/*`     - Server-rendered link management UI
//! - `GET /{code}`      - Short link resolution (catch-all, matched last)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling
//!
//! The `/{code}` catch-all is registered after the fixed routes, so
//! `/dashboard` and `/healthz` can never be shadowed by a short code.

use crate::state::AppState;
use crate::web;
use crate::web::handlers::{healthz_handler, redirect_handler, root_handler};
use crate::web::middleware::tracing;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// The router without the path-normalization wrapper.
///
/// Split out because [`NormalizePath`] is not itself a [`Router`]; tests
/// drive this directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/healthz", get(healthz_handler))
        .nest("/dashboard", web::routes::routes())
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}
