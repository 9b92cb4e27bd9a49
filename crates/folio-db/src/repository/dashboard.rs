//! # Dashboard Repository
//!
//! Queries behind the dashboard overview page: the monthly revenue chart
//! and the four summary cards.
//!
//! ## Card Aggregation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                card_data(): the gather pattern                      │
//! │                                                                     │
//! │  build COUNT(invoices)  ┐                                           │
//! │  build COUNT(customers) ├── all three futures constructed FIRST,    │
//! │  build SUM(paid/pending)┘   then awaited together (try_join!)       │
//! │                                                                     │
//! │  The overlap is the point: total latency is the slowest of the      │
//! │  three, not their sum. Do not refactor into sequential awaits.      │
//! │                                                                     │
//! │  The triple is NOT wrapped in a transaction; each aggregate is      │
//! │  individually consistent, the set is eventually consistent under    │
//! │  concurrent writes.                                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::PgPool;
use tracing::debug;

use crate::error::{DbResult, SqlxResultExt};
use folio_core::money::format_currency;
use folio_core::types::{CardData, Revenue};

/// Repository for dashboard overview queries.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Creates a new DashboardRepository.
    pub fn new(pool: PgPool) -> Self {
        DashboardRepository { pool }
    }

    /// Fetches all revenue points for the chart.
    ///
    /// The `revenue` table is a pre-aggregated read model; rows come back
    /// in the store's natural order (no ordering contract).
    pub async fn revenue(&self) -> DbResult<Vec<Revenue>> {
        debug!("Fetching revenue data");

        sqlx::query_as("SELECT month, revenue FROM revenue")
            .fetch_all(&self.pool)
            .await
            .for_operation("fetch revenue data")
    }

    /// Fetches the four summary-card values.
    ///
    /// Issues three independent aggregate queries concurrently and
    /// combines the results; `NULL` sums (empty invoice table) coalesce
    /// to 0 cents before formatting.
    pub async fn card_data(&self) -> DbResult<CardData> {
        debug!("Fetching card data");

        let invoice_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices").fetch_one(&self.pool);
        let customer_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers").fetch_one(&self.pool);
        let status_sums = sqlx::query_as::<_, StatusSumsRecord>(
            "SELECT \
                 SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END) AS paid, \
                 SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END) AS pending \
             FROM invoices",
        )
        .fetch_one(&self.pool);

        // All three queries are in flight before any is awaited
        let (invoice_count, customer_count, sums) =
            tokio::try_join!(invoice_count, customer_count, status_sums)
                .for_operation("fetch card data")?;

        Ok(CardData {
            invoice_count,
            customer_count,
            total_paid: format_currency(sums.paid.unwrap_or(0)),
            total_pending: format_currency(sums.pending.unwrap_or(0)),
        })
    }
}

// =============================================================================
// Row Records
// =============================================================================

/// Conditional sums over the whole invoices table; `NULL` when the table
/// is empty.
#[derive(sqlx::FromRow)]
struct StatusSumsRecord {
    paid: Option<i64>,
    pending: Option<i64>,
}
