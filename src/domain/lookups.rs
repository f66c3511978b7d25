//! Traits for the external lookups a URL check depends on.

use crate::domain::entities::{ThreatMatch, WhoisResult};
use async_trait::async_trait;

/// Errors from a threat lookup.
///
/// Distinct from "no threats found": any of these means the URL could not be judged.
#[derive(Debug, thiserror::Error)]
pub enum ThreatLookupError {
    /// Transport failure or an undecodable response body.
    #[error("threat service request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("threat service returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Queries a threat-intelligence service for known threats against a URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::safe_browsing::SafeBrowsingClient`] - Google Safe Browsing v4
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreatLookup: Send + Sync {
    /// Checks a single URL.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(matches))` if the service reported at least one match
    /// - `Ok(None)` if no threats are known
    ///
    /// # Errors
    ///
    /// Returns [`ThreatLookupError`] on transport failures, non-2xx responses or
    /// malformed response bodies. A failed lookup is never reported as "no threats".
    async fn check_threats(&self, url: &str) -> Result<Option<Vec<ThreatMatch>>, ThreatLookupError>;
}

/// Looks up domain registration metadata.
///
/// Implementations absorb every failure and return [`WhoisResult::failed`] instead,
/// so a registration lookup can never fail the check it belongs to.
///
/// # Implementations
///
/// - [`crate::infrastructure::whois::WhoisLookup`] - RDAP/WHOIS via the `whois-service` crate
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationLookup: Send + Sync {
    /// Looks up registration data for a bare hostname.
    async fn lookup(&self, domain: &str) -> WhoisResult;
}
