//! Per-link analytics service.

use std::sync::Arc;

use crate::backend::api::BackendApi;
use crate::backend::failure::ApiFailure;
use crate::domain::entities::LinkStats;

/// Read-only service for per-code link analytics.
///
/// Stats are fetched on demand and never cached across navigations.
pub struct StatsService<B: BackendApi> {
    backend: Arc<B>,
}

impl<B: BackendApi> StatsService<B> {
    /// Creates a new statistics service.
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Fetches analytics for a specific short code.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiFailure`]; a missing code carries status
    /// 404. The caller renders a single error state for any failure.
    pub async fn stats_for(&self, code: &str) -> Result<LinkStats, ApiFailure> {
        self.backend.link_stats(code).await
    }
}
