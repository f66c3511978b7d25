//! Google Safe Browsing v4 threat lookup client.

use crate::domain::entities::ThreatMatch;
use crate::domain::lookups::{ThreatLookup, ThreatLookupError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Public `threatMatches:find` endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://safebrowsing.googleapis.com/v4/threatMatches:find";

/// Client identifier reported to the threat service.
pub const DEFAULT_CLIENT_ID: &str = "safe-url-check";

const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

const THREAT_TYPES: [&str; 4] = [
    "MALWARE",
    "SOCIAL_ENGINEERING",
    "UNWANTED_SOFTWARE",
    "POTENTIALLY_HARMFUL_APPLICATION",
];
const PLATFORM_TYPES: [&str; 1] = ["ANY_PLATFORM"];
const THREAT_ENTRY_TYPES: [&str; 1] = ["URL"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FindThreatMatchesRequest<'a> {
    client: ClientInfo<'a>,
    threat_info: ThreatInfo<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientInfo<'a> {
    client_id: &'a str,
    client_version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThreatInfo<'a> {
    threat_types: &'a [&'a str],
    platform_types: &'a [&'a str],
    threat_entry_types: &'a [&'a str],
    threat_entries: [ThreatEntry<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ThreatEntry<'a> {
    url: &'a str,
}

impl<'a> FindThreatMatchesRequest<'a> {
    fn for_url(client_id: &'a str, url: &'a str) -> Self {
        Self {
            client: ClientInfo {
                client_id,
                client_version: CLIENT_VERSION,
            },
            threat_info: ThreatInfo {
                threat_types: &THREAT_TYPES,
                platform_types: &PLATFORM_TYPES,
                threat_entry_types: &THREAT_ENTRY_TYPES,
                threat_entries: [ThreatEntry { url }],
            },
        }
    }
}

/// The service answers `{}` when nothing matched.
#[derive(Debug, Deserialize)]
struct FindThreatMatchesResponse {
    matches: Option<Vec<ThreatMatch>>,
}

/// Threat lookup backed by the Safe Browsing Lookup API.
///
/// The API key is injected at construction and sent as the `key` query
/// parameter. It is stripped from every error before the error leaves the
/// client, so it never reaches the logs.
///
/// One request per lookup, no retries.
pub struct SafeBrowsingClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    client_id: String,
}

impl SafeBrowsingClient {
    /// Creates a client using a shared [`reqwest::Client`].
    pub fn new(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            client_id: client_id.into(),
        }
    }
}

#[async_trait]
impl ThreatLookup for SafeBrowsingClient {
    #[instrument(skip(self))]
    async fn check_threats(
        &self,
        url: &str,
    ) -> Result<Option<Vec<ThreatMatch>>, ThreatLookupError> {
        let request = FindThreatMatchesRequest::for_url(&self.client_id, url);

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ThreatLookupError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: FindThreatMatchesResponse = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)?;

        let matches = parsed.matches.filter(|m| !m.is_empty());
        debug!(
            matches = matches.as_ref().map_or(0, Vec::len),
            "Threat lookup completed"
        );

        Ok(matches)
    }
}
