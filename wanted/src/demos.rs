//! Example queries against the listing endpoint.
//!
//! Each example is split into a fetch and a pure `report_*` function that
//! turns the payload into printable lines, so the formatting is testable
//! without a network.

use lib_wanted::wanted::listing::or_not_available;
use lib_wanted::{ApiCallFbi, SearchCriteria, WantedListing, WantedQuery};
use serde_json::{Map, Value};

pub fn report_basic(payload: &Map<String, Value>) -> Vec<String> {
    let listing = WantedListing::new(payload);
    if listing.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!("Total wanted individuals: {}", listing.total())];
    if let Some(first) = listing.first() {
        lines.push(format!("First wanted person: {}", first.title()));
    }
    lines
}

pub fn report_field_office(office: &str, payload: &Map<String, Value>) -> Vec<String> {
    let listing = WantedListing::new(payload);
    if listing.is_empty() {
        return Vec::new();
    }
    let office = capitalize(office);
    let mut lines = vec![format!("Total in {office} field office: {}", listing.total())];
    if let Some(first) = listing.first() {
        lines.push(format!("First {office} wanted person: {}", first.title()));
        lines.push(format!("Description: {}", first.description()));
    }
    lines
}

pub fn report_paginated(page: u32, payload: &Map<String, Value>) -> Vec<String> {
    let listing = WantedListing::new(payload);
    if listing.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![
        format!("Current page: {}", or_not_available(listing.page())),
        format!("Total pages: {}", or_not_available(listing.total_pages())),
    ];
    if let Some(first) = listing.first() {
        lines.push(format!("First person on page {page}: {}", first.title()));
    }
    lines
}

pub fn report_search(payload: &Map<String, Value>) -> Vec<String> {
    let listing = WantedListing::new(payload);
    match listing.first() {
        Some(first) => vec![
            format!("Found {} matching individuals", listing.total()),
            format!("First match: {}", first.title()),
        ],
        None => Vec::new(),
    }
}

pub async fn basic_example(api: &ApiCallFbi) {
    let payload = api.fetch(None).await;
    print_lines(report_basic(&payload));
}

pub async fn field_office_example(api: &ApiCallFbi, office: &str) {
    let query = WantedQuery::new().field_offices(office);
    let payload = api.fetch(Some(&query)).await;
    print_lines(report_field_office(office, &payload));
}

pub async fn paginated_example(api: &ApiCallFbi, page: u32) {
    let query = WantedQuery::new().page(page);
    let payload = api.fetch(Some(&query)).await;
    print_lines(report_paginated(page, &payload));
}

pub async fn search_example(api: &ApiCallFbi, criteria: &SearchCriteria) {
    let payload = api.search_by_criteria(criteria).await;
    print_lines(report_search(&payload));
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

/// Upper-cases the first character, as the reports print office names.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
