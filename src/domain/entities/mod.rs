//! Typed views of the backend link-store API.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - One shortened link as listed by the backend
//! - [`LinkPage`] - One page of links with pagination metadata
//! - [`LinkStats`] - Per-code analytics projection
//! - [`NewShortLink`] / [`CreatedLink`] - Create request and response shapes
//! - [`BackendHealth`] / [`HealthSnapshot`] - Liveness reporting
//!
//! None of these are cached or shared between requests; every page render
//! re-fetches what it needs and owns the result for one render cycle.

pub mod health;
pub mod link;

pub use health::{BackendHealth, BackendStatus, FrontendStatus, HealthSnapshot};
pub use link::{CreatedLink, LinkPage, LinkStats, NewShortLink, ShortLink};
