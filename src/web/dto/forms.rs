//! HTML form bodies for dashboard mutations.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::NewShortLink;
use crate::web::dto::pagination::ITEMS_PER_PAGE;

/// Body of the create-link form.
///
/// Browsers submit empty strings for untouched inputs, so a blank custom
/// code is normalized to "no custom code" before validation sees it.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct CreateLinkForm {
    pub url: String,

    #[serde(default)]
    pub custom_code: Option<String>,

    /// Page size to keep after the post-create reset to page 1.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl CreateLinkForm {
    /// Converts the raw form into the backend request shape.
    pub fn into_new_link(self) -> NewShortLink {
        let custom_code = self
            .custom_code
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty());

        NewShortLink {
            url: self.url.trim().to_string(),
            custom_code,
        }
    }

    pub fn limit_or_default(&self) -> u32 {
        self.limit.unwrap_or(ITEMS_PER_PAGE)
    }
}

/// Body of the per-row delete form; carries the view the user was on so the
/// post-delete redirect can return there.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct DeleteLinkForm {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl DeleteLinkForm {
    pub fn page_and_limit(&self) -> (u32, u32) {
        (
            self.page.unwrap_or(1).max(1),
            self.limit.unwrap_or(ITEMS_PER_PAGE),
        )
    }
}
