//! # Query Criteria
//!
//! `WantedQuery` is the free-form query-parameter mapping sent with a listing
//! request. Keys the API does not know are forwarded as-is.
//!
//! `SearchCriteria` is the typed subset used by
//! `ApiCallFbi::search_by_criteria`. Each filter is an `Option`: `None` is
//! omitted, `Some(0)` is a real age and is sent. Blank text filters are
//! omitted too, since an empty `crime_type` cannot narrow anything.

use std::collections::BTreeMap;

/// Query parameters for a listing request, keyed by parameter name.
///
/// Setting a key twice keeps the last value. Pairs are emitted in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WantedQuery {
    params: BTreeMap<String, String>,
}

impl WantedQuery {
    /// An empty query: the request carries no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Sets `key` only when `value` is present.
    pub fn param_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Sets `key` only when `value` is present and not blank.
    pub fn text_opt(self, key: impl Into<String>, value: Option<&str>) -> Self {
        self.param_opt(key, value.map(str::trim).filter(|v| !v.is_empty()))
    }

    /// Result page to return (1-based on the API side).
    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    /// Restricts results to a field office, e.g. `"miami"`.
    pub fn field_offices(self, office: &str) -> Self {
        self.param("field_offices", office)
    }

    /// Value currently set for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// `true` when no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Number of distinct parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// The pairs as they go on the wire.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for WantedQuery
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(WantedQuery::new(), |query, (k, v)| query.param(k, v))
    }
}

/// Typed filters for a criteria search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub crime_type: Option<String>,
    pub nationality: Option<String>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
}

impl SearchCriteria {
    /// Builds the query containing exactly the filters that are set.
    pub fn to_query(&self) -> WantedQuery {
        WantedQuery::new()
            .text_opt("crime_type", self.crime_type.as_deref())
            .text_opt("nationality", self.nationality.as_deref())
            .param_opt("age_min", self.age_min)
            .param_opt("age_max", self.age_max)
    }
}
