//! # Pagination Policy
//!
//! Fixed page-size offset computation and total-page-count derivation,
//! shared by every paginated list query.
//!
//! ## How Pagination Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Page size is fixed at 6 rows.                                      │
//! │                                                                     │
//! │  Page 1 ──► OFFSET 0   (rows 1..=6)                                 │
//! │  Page 2 ──► OFFSET 6   (rows 7..=12)                                │
//! │  Page 3 ──► OFFSET 12  (rows 13..=18)                               │
//! │                                                                     │
//! │  13 matching rows ──► total_pages = ceil(13 / 6) = 3                │
//! │                                                                     │
//! │  Correctness depends on a stable ORDER BY in the query: the         │
//! │  invoice table always orders by date DESC, so back-to-back pages    │
//! │  neither overlap nor skip rows on an unchanged data set.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

/// Number of rows per page in every paginated list view.
pub const ITEMS_PER_PAGE: u32 = 6;

/// Computes the SQL OFFSET for a 1-indexed page number.
///
/// ## Precondition
/// `page >= 1`. Page numbers come from the pagination widget, which only
/// produces values starting at 1; a `page` of 0 is a caller contract
/// violation and is not defended against here.
///
/// ## Example
/// ```rust
/// use folio_core::pagination::offset;
///
/// assert_eq!(offset(1), 0);
/// assert_eq!(offset(3), 12);
/// ```
#[inline]
pub const fn offset(page: u32) -> i64 {
    (page as i64 - 1) * ITEMS_PER_PAGE as i64
}

/// Derives the total page count from a matching-row count.
///
/// Zero rows yield zero pages; a partial final page still counts.
///
/// ## Example
/// ```rust
/// use folio_core::pagination::total_pages;
///
/// assert_eq!(total_pages(0), 0);
/// assert_eq!(total_pages(6), 1);
/// assert_eq!(total_pages(7), 2);
/// ```
#[inline]
pub const fn total_pages(count: u64) -> u64 {
    count.div_ceil(ITEMS_PER_PAGE as u64)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_zero_based() {
        assert_eq!(offset(1), 0);
        assert_eq!(offset(2), 6);
        assert_eq!(offset(3), 12);
        assert_eq!(offset(100), 594);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(5), 1);
        assert_eq!(total_pages(6), 1);
        assert_eq!(total_pages(7), 2);
        assert_eq!(total_pages(12), 2);
        assert_eq!(total_pages(13), 3);
    }

    #[test]
    fn test_offset_and_total_pages_agree() {
        // The offset of the last page always lands inside the row count
        for count in 1..100u64 {
            let last = total_pages(count);
            assert!((offset(last as u32) as u64) < count);
        }
    }
}
