//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Rows per page on every paginated listing.
pub const PAGE_SIZE: i64 = 10;

/// Generic pagination parameter (`?page=`).
///
/// Used by any handler that supports paginated listing. The requested page
/// is clamped via [`page_window`].
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

/// Resolve a requested page against a row count.
///
/// Returns `(page, pages, offset)`. An empty result set still reports one
/// page; out-of-range requests clamp to the nearest valid page.
pub fn page_window(total: i64, requested: Option<i64>) -> (i64, i64, i64) {
    let pages = (total + PAGE_SIZE - 1) / PAGE_SIZE;
    let pages = pages.max(1);
    let page = requested.unwrap_or(1).clamp(1, pages);
    let offset = (page - 1) * PAGE_SIZE;
    (page, pages, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_still_has_one_page() {
        assert_eq!(page_window(0, None), (1, 1, 0));
        assert_eq!(page_window(0, Some(7)), (1, 1, 0));
    }

    #[test]
    fn exact_multiple_of_page_size() {
        // 30 rows is exactly 3 pages.
        assert_eq!(page_window(30, Some(3)), (3, 3, 20));
        assert_eq!(page_window(30, Some(4)), (3, 3, 20));
    }

    #[test]
    fn partial_last_page() {
        // 31 rows spills into a fourth page.
        let (page, pages, offset) = page_window(31, Some(4));
        assert_eq!((page, pages, offset), (4, 4, 30));
    }

    #[test]
    fn out_of_range_clamps() {
        assert_eq!(page_window(25, Some(99)), (3, 3, 20));
        assert_eq!(page_window(25, Some(0)), (1, 3, 0));
        assert_eq!(page_window(25, Some(-5)), (1, 3, 0));
    }

    #[test]
    fn absent_page_defaults_to_first() {
        assert_eq!(page_window(25, None), (1, 3, 0));
    }
}
