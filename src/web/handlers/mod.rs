//! HTML template rendering and redirect handlers.

mod dashboard;
mod health;
mod links;
mod redirect;
mod stats;

pub use dashboard::{dashboard_handler, root_handler};
pub use health::{health_page_handler, healthz_handler};
pub use links::{create_link_handler, delete_link_handler};
pub use redirect::redirect_handler;
pub use stats::stats_handler;
