//! URL safety check orchestration.

use crate::domain::entities::UrlVerdict;
use crate::domain::lookups::{RegistrationLookup, ThreatLookup, ThreatLookupError};
use crate::utils::extract_domain::extract_domain;
use std::sync::Arc;
use tracing::info;

/// Reasons a URL could not be judged.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid URL")]
    InvalidUrl,

    /// The threat service could not be consulted. Unlike WHOIS, this is fatal:
    /// no verdict is produced without a successful threat check.
    #[error("threat lookup failed: {0}")]
    ThreatLookup(#[from] ThreatLookupError),
}

/// Service combining domain extraction, threat lookup and WHOIS into a verdict.
///
/// Lookups run one after the other: registration data is only fetched once the
/// threat check has succeeded.
pub struct UrlCheckService {
    threats: Arc<dyn ThreatLookup>,
    registrations: Arc<dyn RegistrationLookup>,
}

impl UrlCheckService {
    /// Creates a new URL check service.
    pub fn new(threats: Arc<dyn ThreatLookup>, registrations: Arc<dyn RegistrationLookup>) -> Self {
        Self {
            threats,
            registrations,
        }
    }

    /// Checks a URL.
    ///
    /// # Flow
    ///
    /// 1. Reject an empty URL
    /// 2. Extract the hostname, rejecting unparseable URLs
    /// 3. Query the threat service with the full URL
    /// 4. Look up WHOIS data for the bare hostname
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::MissingUrl`] or [`CheckError::InvalidUrl`] before
    /// any lookup is made. Returns [`CheckError::ThreatLookup`] if the threat
    /// service fails; the WHOIS lookup is skipped in that case.
    pub async fn check(&self, url: &str) -> Result<UrlVerdict, CheckError> {
        if url.is_empty() {
            return Err(CheckError::MissingUrl);
        }

        let domain = extract_domain(url).ok_or(CheckError::InvalidUrl)?;

        let threats = self.threats.check_threats(url).await?.unwrap_or_default();

        let whois = self.registrations.lookup(&domain).await;

        let verdict = UrlVerdict {
            domain,
            threats,
            whois,
        };

        info!(
            domain = %verdict.domain,
            safe = verdict.is_safe(),
            threats = verdict.threats.len(),
            whois_ok = !verdict.whois.is_failed(),
            "URL checked"
        );

        Ok(verdict)
    }
}
