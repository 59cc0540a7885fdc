//! Client interface to the backend link store.

use crate::backend::failure::ApiFailure;
use crate::domain::entities::{BackendHealth, CreatedLink, LinkPage, LinkStats, NewShortLink};
use async_trait::async_trait;

/// Raw outcome of probing a short code with redirect-following disabled.
///
/// The resolver interprets this; the client boundary only reports what the
/// backend answered. Any status at all is an `Ok` here; only a transport
/// failure surfaces as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRedirect {
    pub status: u16,
    pub location: Option<String>,
    /// Response body text, captured only for unexpected statuses so the
    /// resolver can log it for diagnostics.
    pub body: Option<String>,
}

/// One operation per backend capability.
///
/// Implementations normalize every failure into [`ApiFailure`]; callers never
/// see a raw transport error. On success the parsed JSON is returned typed to
/// the caller's expected shape with no validation beyond parsing.
///
/// # Implementations
///
/// - [`crate::backend::http::HttpBackend`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Fetches one page of links: `GET /api/links?page=<n>&limit=<n>`.
    async fn list_links(&self, page: u32, limit: u32) -> Result<LinkPage, ApiFailure>;

    /// Fetches per-code analytics: `GET /api/links/{code}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiFailure`] with status 404 when the code is unknown.
    async fn link_stats(&self, code: &str) -> Result<LinkStats, ApiFailure>;

    /// Creates a link: `POST /api/links`.
    ///
    /// The returned `short_url` is already rewritten to the public origin;
    /// see [`crate::backend::http::rewrite_short_url`].
    ///
    /// # Errors
    ///
    /// Returns an [`ApiFailure`] with status 409 on a code collision and
    /// 400 on backend-side validation failure.
    async fn create_link(&self, link: &NewShortLink) -> Result<CreatedLink, ApiFailure>;

    /// Deletes a link by code: `DELETE /api/links/{code}`.
    ///
    /// Success carries an empty body; it is not parsed.
    async fn delete_link(&self, code: &str) -> Result<(), ApiFailure>;

    /// Probes backend liveness: `GET /healthz`.
    async fn health(&self) -> Result<BackendHealth, ApiFailure>;

    /// Probes a short code at `GET /{code}` with redirect-following disabled.
    ///
    /// # Errors
    ///
    /// Only genuine transport failures are errors; every HTTP status the
    /// backend answers with is reported as a [`RawRedirect`].
    async fn fetch_redirect(&self, code: &str) -> Result<RawRedirect, ApiFailure>;
}
