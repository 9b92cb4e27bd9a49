//! # Invoice Repository
//!
//! Database operations for invoices.
//!
//! ## Search / Pagination Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 How Invoice Search Works                            │
//! │                                                                     │
//! │  User types: "lee"                                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ILIKE '%lee%' across: customer name, customer email,               │
//! │  amount::text, date::text, status (OR-combined)                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ORDER BY invoices.date DESC ── stable order is what makes          │
//! │  LIMIT 6 OFFSET (page-1)*6     back-to-back pages disjoint          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  pages("lee") counts the SAME predicate (shared SQL fragment,       │
//! │  so the list and the page count can never drift apart)              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Amount Shaping
//! List rows carry `"$250.00"` strings; only [`InvoiceRepository::by_id`]
//! (the edit-form path) converts to numeric dollars.

use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult, SqlxResultExt};
use crate::repository::like_pattern;
use folio_core::money::Money;
use folio_core::pagination::{offset, total_pages, ITEMS_PER_PAGE};
use folio_core::types::{InvoiceDraft, InvoiceForm, InvoiceRow, LatestInvoice};

/// OR-combined substring predicate shared by `filtered` and `pages`.
///
/// `$1` is always the `%…%`-wrapped search text; the same bind is reused
/// for every arm. Casting amount and date to text mirrors how the search
/// box treats every column as free text.
const SEARCH_PREDICATE: &str = "customers.name ILIKE $1 \
     OR customers.email ILIKE $1 \
     OR invoices.amount::text ILIKE $1 \
     OR invoices.date::text ILIKE $1 \
     OR invoices.status ILIKE $1";

/// Repository for invoice database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.invoices();
///
/// let recent = repo.latest().await?;
/// let page_two = repo.filtered("lee", 2).await?;
/// let form = repo.by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: PgPool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository.
    pub fn new(pool: PgPool) -> Self {
        InvoiceRepository { pool }
    }

    /// Fetches the five most recent invoices for the dashboard.
    ///
    /// Joined with customers, ordered by date descending, amounts
    /// formatted for display.
    pub async fn latest(&self) -> DbResult<Vec<LatestInvoice>> {
        debug!("Fetching latest invoices");

        let rows: Vec<LatestInvoiceRecord> = sqlx::query_as(
            "SELECT invoices.id, customers.name, customers.image_url, customers.email, \
                    invoices.amount \
             FROM invoices \
             JOIN customers ON invoices.customer_id = customers.id \
             ORDER BY invoices.date DESC \
             LIMIT 5",
        )
        .fetch_all(&self.pool)
        .await
        .for_operation("fetch the latest invoices")?;

        Ok(rows
            .into_iter()
            .map(|row| LatestInvoice {
                id: row.id,
                name: row.name,
                image_url: row.image_url,
                email: row.email,
                amount: Money::from_cents(row.amount.into()).format(),
            })
            .collect())
    }

    /// Fetches one page of the searchable invoice table.
    ///
    /// ## Arguments
    /// * `query` - Free text from the search box (untrusted; bound, never
    ///   interpolated). Empty text matches every invoice.
    /// * `page` - 1-indexed page number; `page >= 1` is a caller
    ///   precondition (see [`folio_core::pagination::offset`]).
    pub async fn filtered(&self, query: &str, page: u32) -> DbResult<Vec<InvoiceRow>> {
        debug!(query = %query, page = %page, "Fetching filtered invoices");

        let sql = format!(
            "SELECT invoices.id, invoices.amount, invoices.date, invoices.status, \
                    customers.name, customers.email, customers.image_url \
             FROM invoices \
             JOIN customers ON invoices.customer_id = customers.id \
             WHERE {SEARCH_PREDICATE} \
             ORDER BY invoices.date DESC \
             LIMIT $2 OFFSET $3"
        );

        let rows: Vec<FilteredInvoiceRecord> = sqlx::query_as(&sql)
            .bind(like_pattern(query))
            .bind(i64::from(ITEMS_PER_PAGE))
            .bind(offset(page))
            .fetch_all(&self.pool)
            .await
            .for_operation("fetch invoices")?;

        rows.into_iter()
            .map(shape_invoice_row)
            .collect::<Result<_, _>>()
            .for_operation("fetch invoices")
    }

    /// Counts pages matching the search text.
    ///
    /// Runs the exact predicate of [`InvoiceRepository::filtered`] without
    /// limit/offset and divides by the page size, rounding up.
    pub async fn pages(&self, query: &str) -> DbResult<u64> {
        let sql = format!(
            "SELECT COUNT(*) \
             FROM invoices \
             JOIN customers ON invoices.customer_id = customers.id \
             WHERE {SEARCH_PREDICATE}"
        );

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(like_pattern(query))
            .fetch_one(&self.pool)
            .await
            .for_operation("fetch total number of invoices")?;

        Ok(total_pages(count as u64))
    }

    /// Fetches a single invoice for the edit form.
    ///
    /// ## Returns
    /// * `Ok(Some(InvoiceForm))` - Found; amount converted to numeric
    ///   dollars (the form's number input), never a formatted string
    /// * `Ok(None)` - No such invoice (absence is not an error here)
    pub async fn by_id(&self, id: Uuid) -> DbResult<Option<InvoiceForm>> {
        debug!(id = %id, "Fetching invoice");

        let row: Option<InvoiceFormRecord> = sqlx::query_as(
            "SELECT invoices.id, invoices.customer_id, invoices.amount, invoices.status \
             FROM invoices \
             WHERE invoices.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .for_operation("fetch invoice")?;

        row.map(|row| {
            Ok(InvoiceForm {
                id: row.id,
                customer_id: row.customer_id,
                amount: Money::from_cents(row.amount.into()).to_dollars(),
                status: parse_status(&row.status)?,
            })
        })
        .transpose()
        .for_operation("fetch invoice")
    }

    /// Inserts a new invoice and returns its generated id.
    pub async fn create(&self, draft: &InvoiceDraft) -> DbResult<Uuid> {
        debug!(customer_id = %draft.customer_id, "Creating invoice");

        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO invoices (customer_id, amount, status, date) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(draft.customer_id)
        .bind(draft.amount.cents())
        .bind(draft.status.as_str())
        .bind(draft.date)
        .fetch_one(&self.pool)
        .await
        .for_operation("create invoice")?;

        Ok(id)
    }

    /// Updates an existing invoice.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Invoice doesn't exist
    pub async fn update(&self, id: Uuid, draft: &InvoiceDraft) -> DbResult<()> {
        debug!(id = %id, "Updating invoice");

        let result = sqlx::query(
            "UPDATE invoices \
             SET customer_id = $2, amount = $3, status = $4, date = $5 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(draft.customer_id)
        .bind(draft.amount.cents())
        .bind(draft.status.as_str())
        .bind(draft.date)
        .execute(&self.pool)
        .await
        .for_operation("update invoice")?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Invoice", id));
        }

        Ok(())
    }

    /// Deletes an invoice.
    ///
    /// ## Returns
    /// * `Ok(())` - Delete successful
    /// * `Err(DbError::NotFound)` - Invoice doesn't exist
    pub async fn delete(&self, id: Uuid) -> DbResult<()> {
        debug!(id = %id, "Deleting invoice");

        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .for_operation("delete invoice")?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Invoice", id));
        }

        Ok(())
    }
}

// =============================================================================
// Row Records
// =============================================================================
// Raw row shapes as they come off the wire; shaping into view records
// (currency formatting, status parsing) happens above, in one place.

#[derive(sqlx::FromRow)]
struct LatestInvoiceRecord {
    id: Uuid,
    name: String,
    image_url: String,
    email: String,
    amount: i32,
}

#[derive(sqlx::FromRow)]
struct FilteredInvoiceRecord {
    id: Uuid,
    amount: i32,
    date: NaiveDate,
    status: String,
    name: String,
    email: String,
    image_url: String,
}

#[derive(sqlx::FromRow)]
struct InvoiceFormRecord {
    id: Uuid,
    customer_id: Uuid,
    amount: i32,
    status: String,
}

fn shape_invoice_row(row: FilteredInvoiceRecord) -> Result<InvoiceRow, sqlx::Error> {
    Ok(InvoiceRow {
        id: row.id,
        amount: Money::from_cents(row.amount.into()).format(),
        date: row.date,
        status: parse_status(&row.status)?,
        name: row.name,
        email: row.email,
        image_url: row.image_url,
    })
}

/// Parses the lowercase status text stored in the database.
///
/// A value outside `pending`/`paid` means the row was written past the
/// schema's expectations; surface it as a decode failure.
fn parse_status(status: &str) -> Result<folio_core::types::InvoiceStatus, sqlx::Error> {
    status
        .parse()
        .map_err(|e: folio_core::types::ParseInvoiceStatusError| sqlx::Error::Decode(Box::new(e)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::types::InvoiceStatus;

    #[test]
    fn test_search_predicate_covers_all_columns() {
        for column in [
            "customers.name",
            "customers.email",
            "invoices.amount::text",
            "invoices.date::text",
            "invoices.status",
        ] {
            assert!(SEARCH_PREDICATE.contains(column), "missing {column}");
        }
        // A single bind feeds every arm
        assert!(!SEARCH_PREDICATE.contains("$2"));
    }

    #[test]
    fn test_shape_invoice_row_formats_amount() {
        let row = FilteredInvoiceRecord {
            id: Uuid::nil(),
            amount: 25000,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            status: "paid".to_string(),
            name: "Amy Burns".to_string(),
            email: "amy@burns.com".to_string(),
            image_url: "/customers/amy-burns.png".to_string(),
        };
        let shaped = shape_invoice_row(row).unwrap();
        assert_eq!(shaped.amount, "$250.00");
        assert_eq!(shaped.status, InvoiceStatus::Paid);
    }

    #[test]
    fn test_shape_invoice_row_rejects_unknown_status() {
        let row = FilteredInvoiceRecord {
            id: Uuid::nil(),
            amount: 100,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            status: "overdue".to_string(),
            name: String::new(),
            email: String::new(),
            image_url: String::new(),
        };
        assert!(shape_invoice_row(row).is_err());
    }
}
