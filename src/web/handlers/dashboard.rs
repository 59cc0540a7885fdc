//! Dashboard page handler: paginated link table with search and actions.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use axum::response::Redirect;
use chrono::Utc;

use crate::backend::failure::{ApiFailure, FailureKind};
use crate::domain::entities::ShortLink;
use crate::state::AppState;
use crate::utils::format::{format_date, format_relative_time, truncate_url};
use crate::web::dto::DashboardQuery;
use crate::web::dto::pagination::dashboard_url;

const URL_DISPLAY_LENGTH: usize = 50;

/// Template for the links dashboard.
///
/// Flash and error fields use the empty string for "absent" so the template
/// stays a plain conditional render.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub rows: Vec<LinkRow>,
    pub query: String,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub shown: usize,
    pub notice: String,
    pub error: String,
    pub load_error: String,
    pub retry_url: String,
    pub prev_url: String,
    pub next_url: String,
}

/// One display row of the links table, fully formatted for the template.
pub struct LinkRow {
    pub short_code: String,
    pub short_url: String,
    pub destination: String,
    pub destination_full: String,
    pub total_clicks: u64,
    pub created: String,
    pub last_accessed: String,
    pub stats_url: String,
    pub delete_url: String,
}

/// Redirects the root path to the dashboard.
pub async fn root_handler() -> Redirect {
    Redirect::to("/dashboard")
}

/// Renders the links dashboard.
///
/// # Endpoint
///
/// `GET /dashboard?page=<n>&limit=<n>&q=<filter>`
///
/// # Behavior
///
/// - Fetches exactly one page and replaces the view wholesale.
/// - When the requested page lies past the last page (typically after
///   deleting the only row of the final page), steps back to the last
///   non-empty page instead of rendering an empty table.
/// - The search filter applies to the loaded page only; the "N of M" counts
///   keep reflecting the unfiltered page.
/// - A failed fetch renders the error message and a retry link re-running
///   the same fetch; nothing retries automatically.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Query(params): Query<DashboardQuery>,
) -> DashboardTemplate {
    let (page, limit) = params.page_and_limit();
    let search = params.search().to_string();

    let mut view = DashboardTemplate {
        rows: Vec::new(),
        query: search.clone(),
        page,
        limit,
        total: 0,
        total_pages: 0,
        shown: 0,
        notice: params.notice.clone().unwrap_or_default(),
        error: params.error.clone().unwrap_or_default(),
        load_error: String::new(),
        retry_url: dashboard_url(page, limit, &search, None, None),
        prev_url: String::new(),
        next_url: String::new(),
    };

    let fetched = match state.links.list_page(page, limit).await {
        Ok(first) if first.total_pages > 0 && page > first.total_pages => {
            state.links.list_page(first.total_pages, limit).await
        }
        other => other,
    };

    let link_page = match fetched {
        Ok(link_page) => link_page,
        Err(failure) => {
            view.load_error = load_error_message(&failure);
            return view;
        }
    };

    let filtered = state.links.filter_items(&link_page.items, &search);
    view.shown = filtered.len();
    view.rows = filtered
        .into_iter()
        .map(|link| link_row(&state, link))
        .collect();

    view.page = link_page.page;
    view.total = link_page.total;
    view.total_pages = link_page.total_pages;
    view.retry_url = dashboard_url(link_page.page, limit, &search, None, None);

    if link_page.page > 1 {
        view.prev_url = dashboard_url(link_page.page - 1, limit, &search, None, None);
    }
    if link_page.page < link_page.total_pages {
        view.next_url = dashboard_url(link_page.page + 1, limit, &search, None, None);
    }

    view
}

fn link_row(state: &AppState, link: &ShortLink) -> LinkRow {
    let now = Utc::now();

    LinkRow {
        short_code: link.short_code.clone(),
        short_url: state.links.short_url(&link.short_code),
        destination: truncate_url(&link.destination_url, URL_DISPLAY_LENGTH),
        destination_full: link.destination_url.clone(),
        total_clicks: link.total_clicks,
        created: format_date(Some(link.created_at)),
        last_accessed: format_relative_time(link.last_accessed, now),
        stats_url: format!("/dashboard/stats/{}", link.short_code),
        delete_url: format!("/dashboard/links/{}/delete", link.short_code),
    }
}

/// Picks the user-facing message for a failed page fetch.
fn load_error_message(failure: &ApiFailure) -> String {
    match failure.kind() {
        FailureKind::NetworkUnreachable => {
            "Cannot reach the link service. Check that the backend is running.".to_string()
        }
        _ => format!("Failed to load links: {}", failure.message),
    }
}
