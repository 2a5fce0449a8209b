//! # Listing View
//!
//! The listing endpoint does not promise a schema. Rather than deserializing
//! into strict structs and failing on drift, `WantedListing` borrows the raw
//! payload and reads each field on demand with a fallback.
//!
//! Expected shape:
//!
//! ```json
//! { "total": 1023, "page": 2, "total_pages": 52,
//!   "items": [ { "title": "JOHN DOE", "description": "..." } ] }
//! ```

use serde_json::{Map, Value};

/// Placeholder printed for missing text and numbers.
pub const NOT_AVAILABLE: &str = "N/A";

/// Read-only view over a listing payload.
#[derive(Debug, Clone, Copy)]
pub struct WantedListing<'a> {
    payload: &'a Map<String, Value>,
}

impl<'a> WantedListing<'a> {
    pub fn new(payload: &'a Map<String, Value>) -> Self {
        Self { payload }
    }

    /// `true` for the empty payload a failed fetch returns.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Total number of matching records, `0` when absent.
    pub fn total(&self) -> u64 {
        self.number("total").unwrap_or(0)
    }

    /// Current page, if reported.
    pub fn page(&self) -> Option<u64> {
        self.number("page")
    }

    /// Number of pages, if reported.
    pub fn total_pages(&self) -> Option<u64> {
        self.number("total_pages")
    }

    /// Records on this page, in payload order. Entries that are not objects
    /// are skipped.
    pub fn items(&self) -> Vec<WantedPerson<'a>> {
        self.payload
            .get("items")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(WantedPerson::new)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First record on the page.
    pub fn first(&self) -> Option<WantedPerson<'a>> {
        self.items().into_iter().next()
    }

    fn number(&self, key: &str) -> Option<u64> {
        self.payload.get(key).and_then(Value::as_u64)
    }
}

/// Read-only view over a single record of `items`.
#[derive(Debug, Clone, Copy)]
pub struct WantedPerson<'a> {
    record: &'a Map<String, Value>,
}

impl<'a> WantedPerson<'a> {
    pub fn new(record: &'a Map<String, Value>) -> Self {
        Self { record }
    }

    pub fn title(&self) -> &'a str {
        self.text("title").unwrap_or(NOT_AVAILABLE)
    }

    pub fn description(&self) -> &'a str {
        self.text("description").unwrap_or(NOT_AVAILABLE)
    }

    /// Any other field, untouched.
    pub fn field(&self, key: &str) -> Option<&'a Value> {
        self.record.get(key)
    }

    fn text(&self, key: &str) -> Option<&'a str> {
        self.record.get(key).and_then(Value::as_str)
    }
}

/// Renders an optional number, or `N/A`.
pub fn or_not_available(value: Option<u64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}
