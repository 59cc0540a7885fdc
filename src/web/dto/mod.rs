//! Query and form parameter types for the dashboard.

pub mod forms;
pub mod pagination;

pub use forms::{CreateLinkForm, DeleteLinkForm};
pub use pagination::{DashboardQuery, ITEMS_PER_PAGE};
