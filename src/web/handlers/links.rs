//! Create and delete handlers for the dashboard's link mutations.
//!
//! Both follow redirect-after-POST: the outcome travels back to the
//! dashboard as a one-shot flash message in the query string, so a browser
//! refresh re-renders the page instead of replaying the mutation.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::Redirect;
use tracing::{info, warn};

use crate::application::services::link_service::CreateError;
use crate::backend::failure::{CreateFailureKind, FailureKind};
use crate::state::AppState;
use crate::web::dto::pagination::dashboard_url;
use crate::web::dto::{CreateLinkForm, DeleteLinkForm};

/// Handles the create-link form.
///
/// # Endpoint
///
/// `POST /dashboard/links`
///
/// # Behavior
///
/// A successful create resets the view to page 1, where the newest link
/// sorts first. Failures keep the submitted page size and surface the
/// classified message as an error flash.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateLinkForm>,
) -> Redirect {
    let limit = form.limit_or_default();
    let link = form.into_new_link();

    match state.links.create(link).await {
        Ok(created) => {
            info!(short_url = %created.short_url, "short link created");
            let notice = format!("Short link created: {}", created.short_url);
            Redirect::to(&dashboard_url(1, limit, "", Some(&notice), None))
        }
        Err(error) => {
            warn!(kind = ?error.kind, message = %error.message, "create link failed");
            let message = create_error_message(&error);
            Redirect::to(&dashboard_url(1, limit, "", None, Some(&message)))
        }
    }
}

/// Handles the per-row delete form.
///
/// # Endpoint
///
/// `POST /dashboard/links/{code}/delete`
///
/// # Behavior
///
/// Redirects back to the page the user was on. If the delete emptied that
/// page, the dashboard render steps back to the last non-empty page. An
/// already-deleted code is reported but otherwise harmless.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Form(form): Form<DeleteLinkForm>,
) -> Redirect {
    let (page, limit) = form.page_and_limit();

    match state.links.delete(&code).await {
        Ok(()) => {
            info!(code = %code, "short link deleted");
            let notice = format!("Deleted link {code}");
            Redirect::to(&dashboard_url(page, limit, "", Some(&notice), None))
        }
        Err(failure) => {
            warn!(code = %code, message = %failure.message, "delete link failed");
            let message = match failure.kind() {
                FailureKind::NotFound => {
                    format!("Link {code} was not found; it may already be deleted")
                }
                FailureKind::NetworkUnreachable => {
                    "Cannot reach the link service. Please try again.".to_string()
                }
                _ => format!("Failed to delete link: {}", failure.message),
            };
            Redirect::to(&dashboard_url(page, limit, "", None, Some(&message)))
        }
    }
}

/// Picks the flash message for a failed create.
///
/// Validation and code-availability failures already carry actionable text;
/// transport failures get a generic retry prompt.
fn create_error_message(error: &CreateError) -> String {
    match &error.kind {
        CreateFailureKind::CodeUnavailable => {
            format!("Custom code is unavailable: {}", error.message)
        }
        CreateFailureKind::InvalidUrl | CreateFailureKind::InvalidCode => error.message.clone(),
        CreateFailureKind::Other(FailureKind::NetworkUnreachable) => {
            "Cannot reach the link service. Please try again.".to_string()
        }
        CreateFailureKind::Other(_) => format!("Failed to create link: {}", error.message),
    }
}
