//! WooCommerce page totals via response headers.
//!
//! Collection endpoints report pagination out of band, not in the JSON body:
//!
//! ```text
//! X-WP-Total: 42
//! X-WP-TotalPages: 3
//! ```
//!
//! Both headers are absent on some caching proxies, so every value defaults
//! to `0` when missing or not a non-negative integer.

use reqwest::header::HeaderMap;

pub const TOTAL_HEADER: &str = "x-wp-total";
pub const TOTAL_PAGES_HEADER: &str = "x-wp-totalpages";

/// One page of records plus the collection totals reported by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    /// Total matching records across all pages.
    pub total: u64,
    pub total_pages: u64,
}

impl<T> PaginationResult<T> {
    /// The result every failed or short-circuited listing degrades to.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            total_pages: 0,
        }
    }

    /// Builds a result from a page of items and the response headers.
    #[must_use]
    pub fn from_headers(items: Vec<T>, headers: &HeaderMap) -> Self {
        Self {
            items,
            total: header_count(headers, TOTAL_HEADER),
            total_pages: header_count(headers, TOTAL_PAGES_HEADER),
        }
    }

    /// Transforms every item, keeping the totals.
    pub fn map<U, F>(self, f: F) -> PaginationResult<U>
    where
        F: FnMut(T) -> U,
    {
        PaginationResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// Reads an integer count header, returning `0` when absent or malformed.
#[must_use]
pub fn header_count(headers: &HeaderMap, name: &str) -> u64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0)
}
