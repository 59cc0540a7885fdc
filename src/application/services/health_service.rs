//! Health aggregation service.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::warn;

use crate::backend::api::BackendApi;
use crate::domain::entities::{BackendStatus, FrontendStatus, HealthSnapshot};

/// Combines local liveness with the backend health probe.
///
/// The frontend side is always reported healthy: by the time a check runs,
/// this service is demonstrably executing and cannot observe its own failure.
/// Checks run only when asked; there is no polling interval.
pub struct HealthService<B: BackendApi> {
    backend: Arc<B>,
    started_at: Instant,
}

impl<B: BackendApi> HealthService<B> {
    /// Creates a new health service; uptime counts from this moment.
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the service started.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Self-reported liveness without probing the backend.
    pub fn frontend_status(&self) -> FrontendStatus {
        FrontendStatus {
            ok: true,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.uptime_seconds(),
            observed_at: Utc::now(),
        }
    }

    /// Runs a full check: local liveness plus the backend health probe.
    ///
    /// A failed probe marks the backend down with the extracted error
    /// message; it never fails the snapshot as a whole.
    pub async fn snapshot(&self) -> HealthSnapshot {
        let backend = match self.backend.health().await {
            Ok(health) => BackendStatus {
                ok: health.ok,
                version: health.version,
                error: None,
            },
            Err(failure) => {
                warn!(%failure, "backend health probe failed");
                BackendStatus {
                    ok: false,
                    version: "Unknown".to_string(),
                    error: Some(failure.message),
                }
            }
        };

        HealthSnapshot {
            frontend: self.frontend_status(),
            backend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::api::MockBackendApi;
    use crate::backend::failure::ApiFailure;
    use crate::domain::entities::BackendHealth;

    #[tokio::test]
    async fn test_snapshot_with_healthy_backend() {
        let mut backend = MockBackendApi::new();
        backend.expect_health().times(1).returning(|| {
            Ok(BackendHealth {
                ok: true,
                version: "2.3.1".to_string(),
            })
        });

        let service = HealthService::new(Arc::new(backend));
        let snapshot = service.snapshot().await;

        assert!(snapshot.all_healthy());
        assert!(snapshot.frontend.ok);
        assert_eq!(snapshot.backend.version, "2.3.1");
        assert!(snapshot.backend.error.is_none());
    }

    #[tokio::test]
    async fn test_snapshot_with_unreachable_backend() {
        let mut backend = MockBackendApi::new();
        backend
            .expect_health()
            .times(1)
            .returning(|| Err(ApiFailure::transport("Network error occurred")));

        let service = HealthService::new(Arc::new(backend));
        let snapshot = service.snapshot().await;

        assert!(!snapshot.all_healthy());
        // The frontend cannot observe its own failure.
        assert!(snapshot.frontend.ok);
        assert!(!snapshot.backend.ok);
        assert_eq!(snapshot.backend.version, "Unknown");
        assert_eq!(
            snapshot.backend.error.as_deref(),
            Some("Network error occurred")
        );
    }

    #[tokio::test]
    async fn test_backend_reporting_not_ok_is_preserved() {
        let mut backend = MockBackendApi::new();
        backend.expect_health().times(1).returning(|| {
            Ok(BackendHealth {
                ok: false,
                version: "2.3.1".to_string(),
            })
        });

        let service = HealthService::new(Arc::new(backend));
        let snapshot = service.snapshot().await;

        assert!(!snapshot.backend.ok);
        assert!(snapshot.backend.error.is_none());
    }
}
