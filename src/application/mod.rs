//! Application layer: resolver and service orchestration.
//!
//! Services hold no state beyond the backend client handle; every operation
//! fetches fresh, owns its result for one render cycle, and classifies its
//! own failures. Nothing is cached across navigations.
//!
//! # Modules
//!
//! - [`resolver`] - Short-code resolution into an explicit three-way outcome
//! - [`services`] - Link management, stats, and health aggregation

pub mod resolver;
pub mod services;
