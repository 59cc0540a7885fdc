//! Shared application state injected into all handlers.

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{HealthService, LinkService, StatsService};
use crate::backend::http::HttpBackend;
use crate::config::Config;

/// Handler-visible state: the configured services plus the backend client.
///
/// Everything is behind `Arc`; handlers share the clients but no mutable
/// state. Each request fetches and owns its own data for one render cycle.
#[derive(Clone)]
pub struct AppState {
    pub links: Arc<LinkService<HttpBackend>>,
    pub stats: Arc<StatsService<HttpBackend>>,
    pub health: Arc<HealthService<HttpBackend>>,
    pub backend: Arc<HttpBackend>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the backend client and services from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(config: Config) -> Result<Self> {
        let backend = Arc::new(HttpBackend::new(&config)?);

        Ok(Self {
            links: Arc::new(LinkService::new(backend.clone(), config.public_url.clone())),
            stats: Arc::new(StatsService::new(backend.clone())),
            health: Arc::new(HealthService::new(backend.clone())),
            backend,
            config: Arc::new(config),
        })
    }
}
