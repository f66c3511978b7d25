//! Infrastructure layer for external integrations.
//!
//! This layer implements the lookup traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`safe_browsing`] - Google Safe Browsing threat lookups
//! - [`whois`] - RDAP/WHOIS registration lookups

pub mod safe_browsing;
pub mod whois;

pub use safe_browsing::SafeBrowsingClient;
pub use whois::WhoisLookup;
