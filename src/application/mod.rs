//! Application layer: orchestration of a URL check.
//!
//! - [`services`] - [`services::UrlCheckService`] and its error type

pub mod services;
