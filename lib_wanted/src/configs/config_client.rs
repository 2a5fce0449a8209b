use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Production endpoint of the FBI Most Wanted listing API.
pub const FBI_WANTED_URL: &str = "https://api.fbi.gov/wanted/v1/list";

/// Client identifier sent as the `User-Agent` header.
pub const CLIENT_USER_AGENT: &str = "FBI Wanted API Client/1.0";

/// Statuses treated as transient and retried by the transport.
pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Backoff bounds are inverted: min {min_ms}ms > max {max_ms}ms")]
    InvertedBackoff { min_ms: u64, max_ms: u64 },

    #[error("Status {0} is not a valid HTTP status code")]
    InvalidStatus(u16),
}

/// # Client Configuration
///
/// Everything the Most Wanted client needs to build its transport. Every
/// field has a default, so a JSON file only has to name what it changes.
///
/// The defaults reproduce the reference retry behavior: three retries on
/// `429/500/502/503/504`, exponential backoff of 1s, 2s, 4s, a 10s timeout
/// per attempt, and a 60s courtesy wait when a rate-limit response carries no
/// usable `Retry-After`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Absolute URL of the listing endpoint.
    pub base_url: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Timeout applied to each individual attempt, in milliseconds.
    pub timeout_ms: u64,
    /// Retries on top of the first attempt.
    pub max_retries: u32,
    /// Wait before the first retry, in milliseconds. Doubles per retry.
    pub backoff_min_ms: u64,
    /// Upper bound on a single backoff wait, in milliseconds.
    pub backoff_max_ms: u64,
    /// HTTP statuses that trigger a retry.
    pub retry_statuses: Vec<u16>,
    /// Courtesy wait after a terminal 429 without a parseable `Retry-After`.
    pub default_retry_after_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: FBI_WANTED_URL.to_string(),
            user_agent: CLIENT_USER_AGENT.to_string(),
            timeout_ms: 10_000,
            max_retries: 3,
            backoff_min_ms: 1_000,
            backoff_max_ms: 4_000,
            retry_statuses: RETRYABLE_STATUSES.to_vec(),
            default_retry_after_secs: 60,
        }
    }
}

impl ClientConfig {
    /// Reads a JSON configuration file. Missing keys fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the transport builder relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backoff_min_ms > self.backoff_max_ms {
            return Err(ConfigError::InvertedBackoff {
                min_ms: self.backoff_min_ms,
                max_ms: self.backoff_max_ms,
            });
        }
        if let Some(bad) = self.retry_statuses.iter().find(|s| !(100..=999).contains(*s)) {
            return Err(ConfigError::InvalidStatus(*bad));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn backoff_min(&self) -> Duration {
        Duration::from_millis(self.backoff_min_ms)
    }

    pub fn backoff_max(&self) -> Duration {
        Duration::from_millis(self.backoff_max_ms)
    }

    pub fn default_retry_after(&self) -> Duration {
        Duration::from_secs(self.default_retry_after_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_reference_policy() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.fbi.gov/wanted/v1/list");
        assert_eq!(config.user_agent, "FBI Wanted API Client/1.0");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.backoff_min(), Duration::from_secs(1));
        assert_eq!(config.backoff_max(), Duration::from_secs(4));
        assert_eq!(config.retry_statuses, vec![429, 500, 502, 503, 504]);
        assert_eq!(config.default_retry_after(), Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"baseUrl": "http://localhost:8080/list", "maxRetries": 1}}"#).unwrap();

        let config = ClientConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/list");
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.user_agent, CLIENT_USER_AGENT);
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn inverted_backoff_is_rejected() {
        let config = ClientConfig {
            backoff_min_ms: 5_000,
            backoff_max_ms: 1_000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedBackoff { min_ms: 5_000, max_ms: 1_000 })
        ));
    }

    #[test]
    fn out_of_range_status_is_rejected() {
        let config = ClientConfig {
            retry_statuses: vec![500, 42],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidStatus(42))));
    }

    #[test]
    fn malformed_file_reports_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            ClientConfig::from_json_file(file.path()),
            Err(ConfigError::JsonError(_))
        ));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            ClientConfig::from_json_file(&missing),
            Err(ConfigError::IoError(_))
        ));
    }
}
