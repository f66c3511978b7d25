//! DTOs for the URL check endpoint.

use crate::domain::entities::{ThreatMatch, UrlVerdict, WhoisResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message attached to safe verdicts.
pub const SAFE_MESSAGE: &str = "URL is safe";

/// Request to check a single URL.
///
/// `url` is kept as raw JSON: clients may send anything, and only a non-empty
/// string is checkable.
#[derive(Debug, Default, Deserialize)]
pub struct CheckUrlRequest {
    #[serde(default)]
    pub url: Option<Value>,
}

/// Check verdict.
///
/// ```json
/// { "safe": true, "domain": "example.com", "message": "URL is safe", "whois": { ... } }
/// { "safe": false, "domain": "example.com", "threats": [ ... ], "whois": { ... } }
/// ```
#[derive(Debug, Serialize)]
pub struct CheckUrlResponse {
    pub safe: bool,
    pub domain: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub threats: Option<Vec<ThreatMatch>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub whois: WhoisResult,
}

impl From<UrlVerdict> for CheckUrlResponse {
    fn from(verdict: UrlVerdict) -> Self {
        if verdict.is_safe() {
            Self {
                safe: true,
                domain: verdict.domain,
                threats: None,
                message: Some(SAFE_MESSAGE.to_string()),
                whois: verdict.whois,
            }
        } else {
            Self {
                safe: false,
                domain: verdict.domain,
                threats: Some(verdict.threats),
                message: None,
                whois: verdict.whois,
            }
        }
    }
}
