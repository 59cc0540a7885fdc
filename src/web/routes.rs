//! Dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_link_handler, dashboard_handler, delete_link_handler, health_page_handler,
    stats_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Dashboard routes, nested under `/dashboard`.
///
/// # Endpoints
///
/// - `GET  /` - Paginated link table with search, create form, and actions
/// - `POST /links` - Create a short link (redirect-after-POST)
/// - `POST /links/{code}/delete` - Delete a link (redirect-after-POST)
/// - `GET  /stats/{code}` - Analytics page for a specific link
/// - `GET  /health` - Frontend and backend health overview
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/links", post(create_link_handler))
        .route("/links/{code}/delete", post(delete_link_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/health", get(health_page_handler))
}
