//! Client boundary to the backend link store.
//!
//! Every HTTP call to the backend goes through this module. The boundary
//! exposes one operation per backend capability and normalizes every failure
//! into [`failure::ApiFailure`] before it leaves; nothing above this layer
//! ever sees a raw transport error.
//!
//! # Modules
//!
//! - [`api`] - [`api::BackendApi`] trait, one method per backend endpoint
//! - [`http`] - [`http::HttpBackend`], the reqwest implementation
//! - [`failure`] - Error normalization and classification

pub mod api;
pub mod failure;
pub mod http;

pub use api::{BackendApi, RawRedirect};
pub use failure::{ApiFailure, CreateFailureKind, FailureKind};
pub use http::HttpBackend;
