//! Per-link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use chrono::Utc;

use crate::backend::failure::FailureKind;
use crate::state::AppState;
use crate::utils::format::{format_date, format_relative_time};

/// Template for the per-link statistics page.
///
/// Any failure collapses into a single error state carrying a message and a
/// link back to the dashboard; a missing code and a server fault look the
/// same apart from the text.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub code: String,
    pub short_url: String,
    pub destination_url: String,
    pub total_clicks: u64,
    pub created: String,
    pub last_accessed: String,
    pub error: String,
}

/// Renders analytics for one short code.
///
/// # Endpoint
///
/// `GET /dashboard/stats/{code}`
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> StatsTemplate {
    match state.stats.stats_for(&code).await {
        Ok(stats) => StatsTemplate {
            short_url: state.links.short_url(&stats.short_code),
            code: stats.short_code,
            destination_url: stats.destination_url,
            total_clicks: stats.total_clicks,
            created: format_date(Some(stats.created_at)),
            last_accessed: format_relative_time(stats.last_accessed, Utc::now()),
            error: String::new(),
        },
        Err(failure) => {
            let error = match failure.kind() {
                FailureKind::NotFound => format!("No link found for code {code}"),
                FailureKind::NetworkUnreachable => {
                    "Cannot reach the link service. Check that the backend is running.".to_string()
                }
                _ => format!("Failed to load statistics: {}", failure.message),
            };

            StatsTemplate {
                code,
                short_url: String::new(),
                destination_url: String::new(),
                total_clicks: 0,
                created: String::new(),
                last_accessed: String::new(),
                error,
            }
        }
    }
}
