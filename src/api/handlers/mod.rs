//! HTTP request handlers for API endpoints.

pub mod check_url;
pub mod health;
pub mod root;

pub use check_url::check_url_handler;
pub use health::health_handler;
pub use root::root_handler;
