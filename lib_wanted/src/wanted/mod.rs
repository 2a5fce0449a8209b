//! # FBI Most Wanted API Integration Module
//!
//! Client and data handling for the FBI Most Wanted listing endpoint.
//!
//! ## Contained Modules:
//!
//! - **`apicallfbi`**: the resilient fetch client. Issues one logical GET per
//!   call, lets the transport retry transient failures, and absorbs terminal
//!   failures into an empty payload.
//! - **`criteria`**: query criteria. Filters are explicit optionals, and
//!   absent filters never reach the wire.
//! - **`listing`**: a read-only view over a listing payload that falls back to
//!   `0` / `"N/A"` for anything missing.

/// Resilient client for the Most Wanted listing endpoint.
pub mod apicallfbi;
/// Query criteria and the typed search filters.
pub mod criteria;
/// Defensive accessors over listing payloads.
pub mod listing;
