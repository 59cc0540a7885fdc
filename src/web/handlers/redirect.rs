//! Handler for inbound short-code navigation.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

use crate::application::resolver::{Resolution, resolve_short_code};
use crate::state::AppState;

/// Terminal page for a short code with no live mapping.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub code: String,
}

/// Degraded page shown when the backend never answered.
///
/// Distinct from not-found: the destination may well exist. This is the one
/// failure surface with no retry affordance, because a failed resolution is
/// not safely retryable without re-navigation.
#[derive(Template, WebTemplate)]
#[template(path = "backend_down.html")]
pub struct BackendDownTemplate {}

/// Resolves `GET /{code}` into exactly one terminal outcome.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Outcomes
///
/// - **307** to the recorded destination
/// - **404** + not-found page when the code has no mapping
/// - **502** + degraded page when the backend is unreachable
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match resolve_short_code(state.backend.as_ref(), &code).await {
        Resolution::Redirect { location } => Redirect::temporary(&location).into_response(),
        Resolution::NotFound => {
            (StatusCode::NOT_FOUND, NotFoundTemplate { code }).into_response()
        }
        Resolution::BackendUnreachable { .. } => {
            (StatusCode::BAD_GATEWAY, BackendDownTemplate {}).into_response()
        }
    }
}
