//! Error types for the retrieval layer.
//!
//! `RateLimited` is separate from `Status` because a terminal 429 carries a
//! server-requested cooldown that callers may want to honor. Everything else
//! that is not a 2xx lands in `Status` with the raw body for debugging.

use std::time::Duration;

use thiserror::Error;

use crate::configs::config_client::ConfigError;

/// Errors raised while constructing an `ApiClient`.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error("Invalid base URL (must be absolute): {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Invalid value for header {name}: {source}")]
    InvalidHeader {
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("Failed to build the HTTP transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by a single logical fetch, after retries are exhausted.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, DNS or timeout failure, or a middleware failure.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The body could not be read off the wire.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// A terminal non-2xx status other than 429.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A terminal 429. `retry_after` is the server's cooldown, or the
    /// configured default when the header is missing or unparseable.
    #[error("rate limited, retry after {}s", .retry_after.as_secs())]
    RateLimited { retry_after: Duration },

    /// A 2xx whose body is not a JSON object.
    #[error("failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Status code of the terminal response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_display_uses_whole_seconds() {
        let err = FetchError::RateLimited {
            retry_after: Duration::from_secs(2),
        };
        assert_eq!(err.to_string(), "rate limited, retry after 2s");
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn status_error_carries_code_and_body() {
        let err = FetchError::Status {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn decode_error_has_no_status() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("failed to decode JSON"));
        assert_eq!(err.status(), None);
    }
}
