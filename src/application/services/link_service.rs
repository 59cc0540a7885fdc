//! Link management service: paginated listing, search filtering, and
//! create/delete orchestration.

use std::sync::Arc;

use validator::{Validate, ValidationErrors};

use crate::backend::api::BackendApi;
use crate::backend::failure::{ApiFailure, CreateFailureKind, classify_create_failure};
use crate::domain::entities::{CreatedLink, LinkPage, NewShortLink, ShortLink};

const URL_INVALID_MESSAGE: &str = "Please enter a valid URL starting with http:// or https://";
const CODE_INVALID_MESSAGE: &str =
    "Custom code must be 3-20 characters of letters, numbers, hyphens, and underscores";

/// A failed create-link attempt, classified and carrying a human message.
///
/// Local validation failures and backend rejections share this shape, so the
/// dashboard treats them uniformly.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateError {
    pub kind: CreateFailureKind,
    pub message: String,
}

/// Service for listing, filtering, creating, and deleting short links.
///
/// Every fetch replaces the caller's state wholesale; there is no cache and
/// no merge with previously loaded pages. Failures are classified but never
/// retried automatically.
pub struct LinkService<B: BackendApi> {
    backend: Arc<B>,
    public_url: String,
}

impl<B: BackendApi> LinkService<B> {
    /// Creates a new link service.
    pub fn new(backend: Arc<B>, public_url: impl Into<String>) -> Self {
        Self {
            backend,
            public_url: public_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetches one page of links.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiFailure`]; callers pick a user-facing
    /// message via [`ApiFailure::kind`].
    pub async fn list_page(&self, page: u32, limit: u32) -> Result<LinkPage, ApiFailure> {
        self.backend.list_links(page, limit).await
    }

    /// Applies the client-side search filter to an already loaded page.
    ///
    /// Case-insensitive substring match against short code or destination
    /// URL. Deliberately limited to the current page: it neither re-queries
    /// the backend nor affects `total`/`total_pages`.
    pub fn filter_items<'a>(&self, items: &'a [ShortLink], query: &str) -> Vec<&'a ShortLink> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return items.iter().collect();
        }

        items
            .iter()
            .filter(|link| {
                link.short_code.to_lowercase().contains(&needle)
                    || link.destination_url.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Creates a short link.
    ///
    /// Input is validated locally first; an invalid URL or custom code is
    /// rejected before any network call. Backend failures are classified via
    /// [`classify_create_failure`], so a taken code surfaces as
    /// [`CreateFailureKind::CodeUnavailable`] rather than a generic error.
    ///
    /// # Errors
    ///
    /// Returns a [`CreateError`] with the classification and message.
    pub async fn create(&self, link: NewShortLink) -> Result<CreatedLink, CreateError> {
        link.validate().map_err(|errors| classify_validation(&errors))?;

        // validator's url check admits any scheme; short links only ever
        // point at web destinations.
        if !link.url.starts_with("http://") && !link.url.starts_with("https://") {
            return Err(CreateError {
                kind: CreateFailureKind::InvalidUrl,
                message: URL_INVALID_MESSAGE.to_string(),
            });
        }

        self.backend
            .create_link(&link)
            .await
            .map_err(|failure| CreateError {
                kind: classify_create_failure(&failure),
                message: failure.message,
            })
    }

    /// Deletes a link by short code.
    ///
    /// The caller is expected to re-list afterwards; this service does not
    /// track page state.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiFailure`] (404 when the code is unknown).
    pub async fn delete(&self, code: &str) -> Result<(), ApiFailure> {
        self.backend.delete_link(code).await
    }

    /// Composes the public-facing short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.public_url, code)
    }
}

/// Maps local validation failures onto the create classification.
fn classify_validation(errors: &ValidationErrors) -> CreateError {
    let field_errors = errors.field_errors();

    if let Some(errs) = field_errors.get("custom_code") {
        return CreateError {
            kind: CreateFailureKind::InvalidCode,
            message: first_message(errs.as_slice(), CODE_INVALID_MESSAGE),
        };
    }

    CreateError {
        kind: CreateFailureKind::InvalidUrl,
        message: field_errors
            .get("url")
            .map(|errs| first_message(errs.as_slice(), URL_INVALID_MESSAGE))
            .unwrap_or_else(|| URL_INVALID_MESSAGE.to_string()),
    }
}

fn first_message(errors: &[validator::ValidationError], fallback: &str) -> String {
    errors
        .first()
        .and_then(|error| error.message.as_ref())
        .map(|message| message.to_string())
        .unwrap_or_else(|| fallback.to_string())
}
