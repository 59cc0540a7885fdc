//! Web layer: the dashboard UI and the short-link redirect surface.
//!
//! Pages are server-rendered with Askama templates; every render fetches
//! fresh data through the application services and owns it for that render
//! only. Mutations use redirect-after-POST so a refresh never replays them.
//!
//! # Modules
//!
//! - [`dto`] - Query/form parameter types
//! - [`handlers`] - Template rendering and redirect handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Dashboard route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
