//! # Configuration Modules
//!
//! This module holds the client-side configuration for the Most Wanted
//! client: endpoint, identification, timeouts and retry policy.

/// Provides `ClientConfig`, its defaults, and JSON file loading.
pub mod config_client;
