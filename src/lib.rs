//! # LinkSwift
//!
//! The client-facing layer of a URL shortening service: short-link redirect
//! resolution plus a server-rendered management dashboard, fronting a
//! backend link store over HTTP.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Wire entities and local validation
//! - **Application Layer** ([`application`]) - Resolution and service orchestration
//! - **Backend Layer** ([`backend`]) - HTTP client for the backend link store
//! - **Web Layer** ([`web`]) - HTML dashboard and the redirect surface
//!
//! ## Features
//!
//! - Short-code resolution with three explicit terminal outcomes
//!   (redirect, not found, backend unreachable)
//! - Paginated link dashboard with search, create, and delete
//! - Per-link click analytics
//! - Health overview combining local liveness with a backend probe
//!
//! ## Quick Start
//!
//! ```bash
//! # Point at the backend link store
//! export BACKEND_URL="http://localhost:8000"
//! export PUBLIC_URL="https://sho.rt"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod application;
pub mod backend;
pub mod domain;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::resolver::{Resolution, resolve_short_code};
    pub use crate::application::services::{HealthService, LinkService, StatsService};
    pub use crate::backend::{ApiFailure, BackendApi, HttpBackend};
    pub use crate::domain::entities::{LinkPage, LinkStats, NewShortLink, ShortLink};
    pub use crate::state::AppState;
}
