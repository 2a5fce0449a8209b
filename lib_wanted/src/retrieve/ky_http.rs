//! # HTTP Retrieval Utilities
//!
//! An asynchronous API client wrapper around `reqwest`, with
//! `reqwest-middleware` retries and standardized JSON response handling.
//!
//! Retries happen inside the middleware and are invisible here: `get`
//! only ever sees the outcome of the last attempt.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Url;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::RetryTransientMiddleware;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::errors::{ClientBuildError, FetchError};
use super::retry::{backoff_policy, RetryOnStatus};
use crate::configs::config_client::ClientConfig;

/// A standardized container for API responses.
///
/// This struct wraps the deserialized data along with metadata about the
/// HTTP transaction, such as status codes and headers.
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// The successfully deserialized response body, present on 2xx.
    pub data: Option<T>,
    /// The raw error body returned by the server if the request failed.
    pub error_body: Option<String>,
    /// The numeric HTTP status code.
    pub status: u16,
    /// Indicates if the status code was in the 2xx range.
    pub success: bool,
    /// The headers returned by the server.
    pub headers: HeaderMap,
}

/// A flexible asynchronous HTTP client.
///
/// Built on top of `reqwest_middleware`, it handles the endpoint URL, the fixed
/// outgoing headers, per-attempt timeouts and automatic retries. Cloning is
/// cheap and clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    /// The underlying middleware-enabled client.
    inner: ClientWithMiddleware,
    /// The endpoint URL, queried as-is.
    base_url: Url,
}

impl ApiClient {
    /// Creates a new `ApiClient` from `config`.
    ///
    /// No network I/O happens here. The transport gets the configured
    /// `User-Agent` and timeout, and is wrapped in a retry middleware using
    /// `backoff_policy` and `RetryOnStatus`.
    ///
    /// # Errors
    /// Fails if the configuration is invalid, the base URL is not absolute,
    /// the user agent is not a valid header value, or the TLS backend cannot
    /// be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientBuildError> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url)?;

        let mut default_headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|source| ClientBuildError::InvalidHeader { name: "user-agent", source })?;
        default_headers.insert(USER_AGENT, agent);

        let transport = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(default_headers)
            .build()?;

        let retry = RetryTransientMiddleware::new_with_policy_and_strategy(
            backoff_policy(config),
            RetryOnStatus::from_config(config),
        );
        let inner = ClientBuilder::new(transport).with(retry).build();

        Ok(Self { inner, base_url })
    }

    /// The endpoint every request targets.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Performs a GET against the base URL and handles the final response.
    ///
    /// `query` pairs are appended in order; nothing is added when the slice
    /// is empty.
    ///
    /// A 2xx body is decoded into `T`. A non-2xx response is not an error at
    /// this level: it comes back with `success: false` and the raw body in
    /// `error_body`, so callers can inspect status and headers.
    ///
    /// # Errors
    /// Transport failures (after retries), unreadable bodies, and 2xx bodies
    /// that do not decode into `T`.
    pub async fn get<T>(&self, query: &[(String, String)]) -> Result<ApiResponse<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        let mut req = self.inner.get(self.base_url.clone());
        if !query.is_empty() {
            req = req.query(query);
        }

        let response = req.send().await?;
        let status = response.status();
        let resp_headers = response.headers().clone();
        debug!(status = status.as_u16(), url = %response.url(), "response received");

        if status.is_success() {
            let bytes = response.bytes().await.map_err(FetchError::Body)?;
            let data = serde_json::from_slice::<T>(&bytes)?;
            Ok(ApiResponse {
                data: Some(data),
                error_body: None,
                status: status.as_u16(),
                success: true,
                headers: resp_headers,
            })
        } else {
            let error_text = response.text().await.ok();
            Ok(ApiResponse {
                data: None,
                error_body: error_text,
                status: status.as_u16(),
                success: false,
                headers: resp_headers,
            })
        }
    }
}
