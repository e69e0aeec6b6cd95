//! Shared response envelope types for API handlers.

use serde::Serialize;

/// One page of a listing plus the paging bookkeeping list screens
/// need to render a pager.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    /// Total rows across all pages.
    pub total: i64,
    /// The page actually served (after clamping).
    pub page: i64,
    /// Number of pages, at least 1 even when empty.
    pub pages: i64,
}
