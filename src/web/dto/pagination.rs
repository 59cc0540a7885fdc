//! Dashboard query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Default page size for the links table.
pub const ITEMS_PER_PAGE: u32 = 10;

/// Largest page size the dashboard will request.
const MAX_PAGE_SIZE: u32 = 100;

/// Query string for the dashboard page.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
/// `notice` and `error` carry one-shot flash messages from
/// redirect-after-POST mutations.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,

    /// Client-side search filter over the loaded page.
    #[serde(default)]
    pub q: Option<String>,

    #[serde(default)]
    pub notice: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

impl DashboardQuery {
    /// Resolves page and limit with defaults, clamped into valid ranges.
    ///
    /// The dashboard is forgiving: `page=0` becomes 1 and out-of-range page
    /// sizes snap back to the defaults rather than failing the render.
    pub fn page_and_limit(&self) -> (u32, u32) {
        let page = self.page.unwrap_or(1).max(1);

        let limit = match self.limit {
            Some(limit) if (1..=MAX_PAGE_SIZE).contains(&limit) => limit,
            _ => ITEMS_PER_PAGE,
        };

        (page, limit)
    }

    /// The search query, trimmed; empty means no filter.
    pub fn search(&self) -> &str {
        self.q.as_deref().unwrap_or("").trim()
    }
}

/// Builds a dashboard URL carrying view state and optional flash messages.
///
/// Mutation handlers redirect here after a POST so a browser refresh never
/// replays the mutation.
pub fn dashboard_url(
    page: u32,
    limit: u32,
    q: &str,
    notice: Option<&str>,
    error: Option<&str>,
) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &page.to_string());
    query.append_pair("limit", &limit.to_string());

    if !q.is_empty() {
        query.append_pair("q", q);
    }
    if let Some(notice) = notice {
        query.append_pair("notice", notice);
    }
    if let Some(error) = error {
        query.append_pair("error", error);
    }

    format!("/dashboard?{}", query.finish())
}
