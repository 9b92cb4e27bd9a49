//! # Customer Repository
//!
//! Database operations for customers.
//!
//! ## Aggregation Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              How the Customers Table Is Built                       │
//! │                                                                     │
//! │  customers LEFT JOIN invoices ── customers with zero invoices       │
//! │       │                          still appear                       │
//! │       ▼                                                             │
//! │  ILIKE '%query%' on name OR email                                   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  GROUP BY customer                                                  │
//! │    COUNT(invoices.id)              → total_invoices                 │
//! │    SUM(CASE pending THEN amount)   → total_pending (NULL when the   │
//! │    SUM(CASE paid    THEN amount)   → total_paid      group is empty)│
//! │       │                                                             │
//! │       ▼                                                             │
//! │  NULL sums coalesce to 0 cents before formatting, so a customer     │
//! │  with no invoices renders "$0.00", never a null                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbResult, SqlxResultExt};
use crate::repository::like_pattern;
use folio_core::money::format_currency;
use folio_core::types::{CustomerField, CustomerSummary};

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: PgPool) -> Self {
        CustomerRepository { pool }
    }

    /// Fetches all customers as id/name pairs for the invoice form
    /// dropdown, ordered by name ascending. No filter.
    pub async fn list(&self) -> DbResult<Vec<CustomerField>> {
        debug!("Fetching all customers");

        sqlx::query_as(
            "SELECT id, name \
             FROM customers \
             ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .for_operation("fetch all customers")
    }

    /// Fetches the customers table: each matching customer with invoice
    /// rollups, ordered by name ascending.
    ///
    /// ## Arguments
    /// * `query` - Free text matched case-insensitively against name OR
    ///   email (untrusted; bound, never interpolated). Empty text matches
    ///   every customer.
    pub async fn filtered(&self, query: &str) -> DbResult<Vec<CustomerSummary>> {
        debug!(query = %query, "Fetching customer table");

        let rows: Vec<CustomerSummaryRecord> = sqlx::query_as(
            "SELECT customers.id, customers.name, customers.email, customers.image_url, \
                    COUNT(invoices.id) AS total_invoices, \
                    SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END) \
                        AS total_pending, \
                    SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END) \
                        AS total_paid \
             FROM customers \
             LEFT JOIN invoices ON customers.id = invoices.customer_id \
             WHERE customers.name ILIKE $1 OR customers.email ILIKE $1 \
             GROUP BY customers.id, customers.name, customers.email, customers.image_url \
             ORDER BY customers.name ASC",
        )
        .bind(like_pattern(query))
        .fetch_all(&self.pool)
        .await
        .for_operation("fetch customer table")?;

        Ok(rows.into_iter().map(shape_customer_summary).collect())
    }
}

// =============================================================================
// Row Records
// =============================================================================

/// Raw aggregation row; the sums are `NULL` for customers whose invoice
/// group is empty (SQL `SUM` over zero rows).
#[derive(sqlx::FromRow)]
struct CustomerSummaryRecord {
    id: Uuid,
    name: String,
    email: String,
    image_url: String,
    total_invoices: i64,
    total_pending: Option<i64>,
    total_paid: Option<i64>,
}

fn shape_customer_summary(row: CustomerSummaryRecord) -> CustomerSummary {
    CustomerSummary {
        id: row.id,
        name: row.name,
        email: row.email,
        image_url: row.image_url,
        total_invoices: row.total_invoices,
        // Coalesce before formatting: "$0.00", never null
        total_pending: format_currency(row.total_pending.unwrap_or(0)),
        total_paid: format_currency(row.total_paid.unwrap_or(0)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_coalesces_null_sums() {
        // A customer with zero invoices: COUNT is 0, both SUMs are NULL
        let row = CustomerSummaryRecord {
            id: Uuid::nil(),
            name: "Evil Rabbit".to_string(),
            email: "evil@rabbit.com".to_string(),
            image_url: "/customers/evil-rabbit.png".to_string(),
            total_invoices: 0,
            total_pending: None,
            total_paid: None,
        };
        let shaped = shape_customer_summary(row);
        assert_eq!(shaped.total_pending, "$0.00");
        assert_eq!(shaped.total_paid, "$0.00");
    }

    #[test]
    fn test_shape_formats_sums() {
        let row = CustomerSummaryRecord {
            id: Uuid::nil(),
            name: "Amy Burns".to_string(),
            email: "amy@burns.com".to_string(),
            image_url: "/customers/amy-burns.png".to_string(),
            total_invoices: 3,
            total_pending: Some(125000),
            total_paid: Some(300),
        };
        let shaped = shape_customer_summary(row);
        assert_eq!(shaped.total_pending, "$1,250.00");
        assert_eq!(shaped.total_paid, "$3.00");
    }
}
