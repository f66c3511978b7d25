//! # URL Safety Check
//!
//! An HTTP service that judges whether a URL is safe to visit.
//!
//! For a submitted URL the service extracts its hostname, asks Google Safe
//! Browsing whether the URL is a known threat, looks up WHOIS registration
//! data for the hostname and returns both in one JSON verdict.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Verdict types and the lookup traits
//! - **Application Layer** ([`application`]) - Check orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Safe Browsing and WHOIS clients
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Failure Policy
//!
//! The threat check is load-bearing: if it fails, the request fails with 500.
//! WHOIS is supplementary: failures are replaced by
//! `{"error": "WHOIS lookup failed"}` inside an otherwise successful verdict.
//!
//! ## Quick Start
//!
//! ```bash
//! export GOOGLE_SAFE_BROWSING_API_KEY="..."
//! export PORT=3000
//! cargo run
//!
//! curl -X POST localhost:3000/check-url \
//!      -H 'content-type: application/json' \
//!      -d '{"url": "http://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CheckError, UrlCheckService};
    pub use crate::domain::entities::{ThreatMatch, UrlVerdict, WhoisResult};
    pub use crate::domain::lookups::{RegistrationLookup, ThreatLookup, ThreatLookupError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
