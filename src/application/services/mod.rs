//! Business logic services for the application layer.

pub mod url_check_service;

pub use url_check_service::{CheckError, UrlCheckService};
