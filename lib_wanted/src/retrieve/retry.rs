//! # Retry Policy
//!
//! Two pieces feed `RetryTransientMiddleware`:
//!
//! - **`backoff_policy`**: an `ExponentialBackoff` doubling from the
//!   configured minimum, capped at the maximum, without jitter. With the
//!   defaults that gives waits of 1s, 2s and 4s before retries 1 to 3.
//! - **`RetryOnStatus`**: decides *whether* a given outcome is worth another
//!   attempt. Only the configured status set is retried; transport failures
//!   are classified by `reqwest-retry`'s default rules (connect errors and
//!   timeouts are transient).

use reqwest::StatusCode;
use reqwest_middleware::Error as MiddlewareError;
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::{default_on_request_failure, Retryable, RetryableStrategy};
use retry_policies::Jitter;

use crate::configs::config_client::ClientConfig;

/// Builds the exponential backoff policy described by `config`.
///
/// `config` must already be validated: inverted bounds would panic inside
/// the builder.
pub fn backoff_policy(config: &ClientConfig) -> ExponentialBackoff {
    ExponentialBackoff::builder()
        .retry_bounds(config.backoff_min(), config.backoff_max())
        .jitter(Jitter::None)
        .base(2)
        .build_with_max_retries(config.max_retries)
}

/// Retry strategy keyed on an explicit set of HTTP statuses.
///
/// Unlike `reqwest-retry`'s default strategy (every 5xx, 408 and 429), only
/// the listed statuses are retried. Any other response, successful or not,
/// is handed straight back to the caller.
#[derive(Debug, Clone)]
pub struct RetryOnStatus {
    statuses: Vec<StatusCode>,
}

impl RetryOnStatus {
    /// Statuses that are not valid HTTP codes are dropped.
    pub fn new(statuses: &[u16]) -> Self {
        Self {
            statuses: statuses
                .iter()
                .filter_map(|code| StatusCode::from_u16(*code).ok())
                .collect(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.retry_statuses)
    }

    /// Classifies a received status.
    pub fn classify(&self, status: StatusCode) -> Option<Retryable> {
        if self.statuses.contains(&status) {
            Some(Retryable::Transient)
        } else {
            None
        }
    }
}

impl RetryableStrategy for RetryOnStatus {
    fn handle(&self, res: &Result<reqwest::Response, MiddlewareError>) -> Option<Retryable> {
        match res {
            Ok(response) => self.classify(response.status()),
            Err(error) => default_on_request_failure(error),
        }
    }
}
