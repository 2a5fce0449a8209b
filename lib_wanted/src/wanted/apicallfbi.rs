//! # FBI Most Wanted API Client
//!
//! A dedicated client for the FBI Most Wanted listing endpoint.
//!
//! ## Core Features:
//! - **Dedicated Client**: wraps a pre-configured `ApiClient` pointed at the
//!   listing URL, sending the `FBI Wanted API Client/1.0` user agent.
//! - **Transparent Retries**: statuses 429/500/502/503/504 and transient
//!   transport failures are retried up to 3 times with 1s/2s/4s backoff by the
//!   middleware. Only the final outcome reaches this module.
//! - **Two Error Surfaces**: `try_fetch` returns a typed `FetchError`, leaving
//!   policy to the caller. `fetch` absorbs every failure into an empty
//!   payload, logs it, and after a terminal 429 waits out the server's
//!   `Retry-After` before returning.

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde_json::{Map, Value};
use tokio::time::sleep;
use tracing::{debug, error, warn};

use super::criteria::{SearchCriteria, WantedQuery};
use crate::configs::config_client::ClientConfig;
use crate::retrieve::errors::{ClientBuildError, FetchError};
use crate::retrieve::ky_http::ApiClient;

/// # FBI API Call Client
///
/// Cheap to clone; clones share the underlying connection pool, so one
/// instance can serve several tasks.
#[derive(Clone)]
pub struct ApiCallFbi {
    /// The generic HTTP client, pre-configured for the listing endpoint.
    client: ApiClient,
    /// Courtesy wait used when a 429 has no usable `Retry-After`.
    default_retry_after: Duration,
}

impl ApiCallFbi {
    /// Client against the production endpoint with the reference policy.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(&ClientConfig::default())
    }

    /// Client built from `config`. No network I/O happens here.
    pub fn with_config(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        Ok(Self {
            client: ApiClient::new(config)?,
            default_retry_after: config.default_retry_after(),
        })
    }

    /// # Try Fetch
    ///
    /// Performs one logical GET against the listing endpoint with `query` as
    /// query parameters (none when `None` or empty).
    ///
    /// ## Outcomes
    /// - 2xx with a JSON object body: the object, unchanged.
    /// - 2xx with anything else: `FetchError::Decode`.
    /// - terminal 429: `FetchError::RateLimited` carrying `Retry-After`
    ///   (or the configured default). Nothing sleeps here.
    /// - other terminal non-2xx: `FetchError::Status`.
    /// - transport failure after retries: `FetchError::Transport`.
    pub async fn try_fetch(&self, query: Option<&WantedQuery>) -> Result<Map<String, Value>, FetchError> {
        let pairs = query.map(WantedQuery::to_pairs).unwrap_or_default();

        let response = self.client.get::<Map<String, Value>>(&pairs).await?;

        if response.success {
            let payload = response.data.unwrap_or_default();
            debug!(status = response.status, keys = payload.len(), "Listing fetched");
            return Ok(payload);
        }

        if response.status == 429 {
            let retry_after = parse_retry_after(&response.headers).unwrap_or(self.default_retry_after);
            return Err(FetchError::RateLimited { retry_after });
        }

        Err(FetchError::Status {
            status: response.status,
            body: response.error_body.unwrap_or_default(),
        })
    }

    /// # Fetch
    ///
    /// Same request as `try_fetch`, but never fails: every error is logged
    /// and an empty payload is returned. An empty result is therefore
    /// indistinguishable from a well-formed empty response; use `try_fetch`
    /// when that matters.
    ///
    /// After a terminal 429 this waits for the `Retry-After` period (60s when
    /// absent) before returning. That wait is a courtesy to the server, not a
    /// further retry.
    pub async fn fetch(&self, query: Option<&WantedQuery>) -> Map<String, Value> {
        match self.try_fetch(query).await {
            Ok(payload) => payload,
            Err(FetchError::RateLimited { retry_after }) => {
                error!(status = 429, "Error fetching data: rate limited");
                warn!(
                    wait_secs = retry_after.as_secs(),
                    "Rate limited. Waiting {} seconds...",
                    retry_after.as_secs()
                );
                sleep(retry_after).await;
                Map::new()
            }
            Err(err @ FetchError::Decode(_)) => {
                error!(error = %err, "Error decoding JSON");
                Map::new()
            }
            Err(err) => {
                error!(error = %err, status = err.status(), "Error fetching data");
                Map::new()
            }
        }
    }

    /// # Search By Criteria
    ///
    /// Sends only the filters present in `criteria`, then behaves exactly
    /// like `fetch`.
    pub async fn search_by_criteria(&self, criteria: &SearchCriteria) -> Map<String, Value> {
        let query = criteria.to_query();
        self.fetch(Some(&query)).await
    }

    /// The listing endpoint this client queries.
    pub fn base_url(&self) -> &str {
        self.client.base_url().as_str()
    }
}

/// Reads `Retry-After` as a whole number of seconds.
///
/// HTTP-date values and garbage yield `None`, which callers treat as "use
/// the default".
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn retry_after_in_seconds() {
        assert_eq!(parse_retry_after(&headers_with("2")), Some(Duration::from_secs(2)));
        assert_eq!(parse_retry_after(&headers_with(" 120 ")), Some(Duration::from_secs(120)));
    }

    #[test]
    fn retry_after_missing_or_unusable() {
        assert_eq!(parse_retry_after(&HeaderMap::new()), None);
        assert_eq!(parse_retry_after(&headers_with("soon")), None);
        assert_eq!(parse_retry_after(&headers_with("Wed, 21 Oct 2015 07:28:00 GMT")), None);
        assert_eq!(parse_retry_after(&headers_with("-5")), None);
    }

    #[test]
    fn default_client_targets_production_endpoint() {
        let api = ApiCallFbi::new().unwrap();
        assert_eq!(api.base_url(), "https://api.fbi.gov/wanted/v1/list");
        assert_eq!(api.default_retry_after, Duration::from_secs(60));
    }
}
