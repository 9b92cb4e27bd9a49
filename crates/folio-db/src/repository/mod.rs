//! # Repository Module
//!
//! Database repository implementations for Folio.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  Page handler                                                       │
//! │       │                                                             │
//! │       │  db.invoices().filtered("lee", 2)                           │
//! │       ▼                                                             │
//! │  InvoiceRepository                                                  │
//! │  ├── latest(&self)                                                  │
//! │  ├── filtered(&self, query, page)                                   │
//! │  ├── pages(&self, query)                                            │
//! │  └── by_id(&self, id)                                               │
//! │       │                                                             │
//! │       │  Parameterized SQL (user text only ever in binds)           │
//! │       ▼                                                             │
//! │  PostgreSQL                                                         │
//! │                                                                     │
//! │  Every method is an independent call: the pool is the only shared   │
//! │  state, and no query results are cached in-process.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`invoice::InvoiceRepository`] - Invoice search, pagination, lookup, writes
//! - [`customer::CustomerRepository`] - Customer lists and aggregation search
//! - [`dashboard::DashboardRepository`] - Revenue chart and summary cards

pub mod customer;
pub mod dashboard;
pub mod invoice;

/// Wraps free-text search input for ILIKE substring matching.
///
/// The wrapped value travels as a bound parameter; `%` and `_` inside the
/// user's text keep their LIKE meaning, exactly as in the original search
/// behavior. An empty query becomes `%%`, which matches every row.
pub(crate) fn like_pattern(query: &str) -> String {
    format!("%{query}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern() {
        assert_eq!(like_pattern("lee"), "%lee%");
        // Empty query matches everything, making filtered == unfiltered
        assert_eq!(like_pattern(""), "%%");
    }
}
