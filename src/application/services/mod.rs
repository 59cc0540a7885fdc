//! Business logic services for the application layer.

pub mod health_service;
pub mod link_service;
pub mod stats_service;

pub use health_service::HealthService;
pub use link_service::{CreateError, LinkService};
pub use stats_service::StatsService;
