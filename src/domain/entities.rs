//! Values produced while checking a single URL.
//!
//! Nothing here outlives one request/response cycle.

use serde::Serialize;
use serde_json::Value;

/// A threat reported by the threat-matching service.
///
/// The shape is owned by the upstream API and relayed unmodified.
pub type ThreatMatch = Value;

/// Sentinel message returned in place of registration data when WHOIS fails.
pub const WHOIS_FAILED_MESSAGE: &str = "WHOIS lookup failed";

/// Outcome of a registration (WHOIS) lookup.
///
/// Serialized untagged, so clients see either the registration record itself
/// or `{"error": "WHOIS lookup failed"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WhoisResult {
    /// Registration data as received from the WHOIS server.
    Record(Value),
    /// The lookup failed; the cause is logged, not exposed.
    Failed { error: String },
}

impl WhoisResult {
    /// Creates the fixed failure marker.
    pub fn failed() -> Self {
        Self::Failed {
            error: WHOIS_FAILED_MESSAGE.to_string(),
        }
    }

    /// Returns `true` if this is the failure marker.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Combined safety verdict for one URL.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlVerdict {
    /// Hostname extracted from the checked URL.
    pub domain: String,
    /// Matches reported by the threat service; empty means safe.
    pub threats: Vec<ThreatMatch>,
    pub whois: WhoisResult,
}

impl UrlVerdict {
    /// A URL is safe iff the threat service reported no matches.
    pub fn is_safe(&self) -> bool {
        self.threats.is_empty()
    }
}
