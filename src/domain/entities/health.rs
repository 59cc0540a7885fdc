//! Liveness entities for the frontend and backend services.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend liveness report from `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendHealth {
    pub ok: bool,
    pub version: String,
}

/// Combined status of this service and the backend it fronts.
///
/// Assembled from scratch on every health check and never persisted;
/// re-checking is a manual action, there is no polling interval.
#[derive(Debug, Clone, Serialize)]
pub struct HealthSnapshot {
    pub frontend: FrontendStatus,
    pub backend: BackendStatus,
}

impl HealthSnapshot {
    /// True when both sides report healthy.
    pub fn all_healthy(&self) -> bool {
        self.frontend.ok && self.backend.ok
    }
}

/// Self-reported liveness of this service.
///
/// `ok` is always true once a check executes: the frontend cannot observe
/// its own failure.
#[derive(Debug, Clone, Serialize)]
pub struct FrontendStatus {
    pub ok: bool,
    pub version: String,
    pub uptime_seconds: u64,
    pub observed_at: DateTime<Utc>,
}

/// Backend liveness as seen through the health probe.
#[derive(Debug, Clone, Serialize)]
pub struct BackendStatus {
    pub ok: bool,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
