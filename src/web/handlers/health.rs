//! Health page and machine liveness endpoint.

use askama::Template;
use askama_web::WebTemplate;
use axum::Json;
use axum::extract::State;

use crate::domain::entities::FrontendStatus;
use crate::state::AppState;
use crate::utils::format::{format_date, format_uptime};

/// Template for the two-card health page.
#[derive(Template, WebTemplate)]
#[template(path = "health.html")]
pub struct HealthTemplate {
    pub all_healthy: bool,
    pub frontend_version: String,
    pub frontend_uptime: String,
    pub backend_ok: bool,
    pub backend_version: String,
    pub backend_error: String,
    pub checked_at: String,
}

/// Renders the health overview.
///
/// # Endpoint
///
/// `GET /dashboard/health`
///
/// # Behavior
///
/// Each page load runs a fresh backend probe. A down backend degrades its
/// card but never the page itself; re-checking is a plain reload.
pub async fn health_page_handler(State(state): State<AppState>) -> HealthTemplate {
    let snapshot = state.health.snapshot().await;

    HealthTemplate {
        all_healthy: snapshot.all_healthy(),
        frontend_version: snapshot.frontend.version,
        frontend_uptime: format_uptime(snapshot.frontend.uptime_seconds),
        backend_ok: snapshot.backend.ok,
        backend_version: snapshot.backend.version,
        backend_error: snapshot.backend.error.unwrap_or_default(),
        checked_at: format_date(Some(snapshot.frontend.observed_at)),
    }
}

/// Machine-readable liveness of this service alone.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// Does not probe the backend; load balancers polling this endpoint must not
/// take the frontend out of rotation because the backend is down.
pub async fn healthz_handler(State(state): State<AppState>) -> Json<FrontendStatus> {
    Json(state.health.frontend_status())
}
