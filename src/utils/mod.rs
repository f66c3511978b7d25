//! Utility functions for request handling.
//!
//! - [`extract_domain`] - Hostname extraction from user-supplied URLs

pub mod extract_domain;
