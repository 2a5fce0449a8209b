//! # lib_wanted
//!
//! A thin, resilient client for the FBI Most Wanted listing API
//! (`https://api.fbi.gov/wanted/v1/list`).
//!
//! ## Modules
//!
//! - **`configs`**: `ClientConfig`, the knobs for endpoint, user agent,
//!   timeout and retry policy.
//! - **`retrieve`**: a generic `ApiClient` over `reqwest-middleware` with
//!   status-aware exponential backoff retries.
//! - **`loggers`**: `tracing` subscriber setup (console + rolling JSON file).
//! - **`wanted`**: the FBI client itself (`ApiCallFbi`), query criteria and a
//!   defensive read-only view over listing payloads.
//!
//! Each module sits behind a cargo feature of the same name; `full` (the
//! default) enables all of them.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, unused_qualifications)]

#[cfg(feature = "configs")]
pub mod configs;
#[cfg(feature = "loggers")]
pub mod loggers;
#[cfg(feature = "retrieve")]
pub mod retrieve;
#[cfg(feature = "wanted")]
pub mod wanted;

#[cfg(feature = "configs")]
pub use configs::config_client::ClientConfig;
#[cfg(feature = "retrieve")]
pub use retrieve::errors::{ClientBuildError, FetchError};
#[cfg(feature = "wanted")]
pub use wanted::apicallfbi::ApiCallFbi;
#[cfg(feature = "wanted")]
pub use wanted::criteria::{SearchCriteria, WantedQuery};
#[cfg(feature = "wanted")]
pub use wanted::listing::{WantedListing, WantedPerson};
