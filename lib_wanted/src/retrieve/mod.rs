//! # Data Retrieval Module
//!
//! Generic HTTP retrieval used by the API clients in this crate. It owns the
//! concerns every client shares: building the transport, attaching query
//! parameters and headers, retrying transient failures, and turning the
//! response into either a decoded payload or a typed error.
//!
//! ## Contained Modules:
//!
//! - **`ky_http`**: `ApiClient`, built on `reqwest` and `reqwest-middleware`,
//!   with automatic retries and exponential backoff.
//! - **`retry`**: the backoff policy and the status-set retry strategy that
//!   `ApiClient` installs.
//! - **`errors`**: construction and fetch error types.

/// Errors raised while building a client or executing a request.
pub mod errors;
/// Generic HTTP API client with retry middleware for resilient network requests.
pub mod ky_http;
/// Backoff policy and retry classification.
pub mod retry;
