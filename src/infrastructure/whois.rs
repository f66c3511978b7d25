//! Domain registration lookups backed by the `whois-service` crate.

use crate::domain::entities::WhoisResult;
use crate::domain::lookups::RegistrationLookup;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Display;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};
use whois_service::{WhoisClient, WhoisError};

/// Default upper bound for one lookup, server discovery included.
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Registration lookup over RDAP and WHOIS.
///
/// The underlying client finds the authoritative server through the IANA
/// bootstrap data and parses its answer into structured fields, which are
/// relayed to callers as an opaque JSON record. The client is created on the
/// first lookup so startup never waits on the network. A failed initialisation
/// is retried by the next lookup.
///
/// Every failure is absorbed into [`WhoisResult::failed`] and logged.
pub struct WhoisLookup {
    client: OnceCell<WhoisClient>,
    timeout: Duration,
}

impl WhoisLookup {
    /// Creates a lookup that gives up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: OnceCell::new(),
            timeout,
        }
    }

    async fn client(&self) -> Result<&WhoisClient, WhoisError> {
        self.client
            .get_or_try_init(WhoisClient::new_without_cache)
            .await
    }
}

#[async_trait]
impl RegistrationLookup for WhoisLookup {
    #[instrument(skip(self))]
    async fn lookup(&self, domain: &str) -> WhoisResult {
        let lookup = async {
            let client = self.client().await?;
            client.lookup(domain).await
        };

        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(result) => {
                if let Ok(response) = &result {
                    debug!(
                        server = %response.whois_server,
                        cached = response.cached,
                        "WHOIS answered"
                    );
                }
                to_whois_result(domain, result.map(|response| response.parsed_data))
            }
            Err(_) => {
                warn!(domain, timeout = ?self.timeout, "WHOIS lookup timed out");
                WhoisResult::failed()
            }
        }
    }
}

/// Turns the parsed part of a lookup into the record relayed to clients.
fn to_whois_result<T, E>(domain: &str, result: Result<Option<T>, E>) -> WhoisResult
where
    T: Serialize,
    E: Display,
{
    match result {
        Ok(Some(parsed)) => match serde_json::to_value(parsed) {
            Ok(record) => WhoisResult::Record(record),
            Err(e) => {
                warn!(domain, error = %e, "WHOIS record could not be encoded");
                WhoisResult::failed()
            }
        },
        Ok(None) => {
            warn!(domain, "WHOIS answer had no parsable registration data");
            WhoisResult::failed()
        }
        Err(e) => {
            warn!(domain, error = %e, "WHOIS lookup failed");
            WhoisResult::failed()
        }
    }
}
