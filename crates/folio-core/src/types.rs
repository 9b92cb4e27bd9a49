//! # Domain Types
//!
//! View records and domain enums used throughout Folio.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         View Records                                │
//! │                                                                     │
//! │  ┌─────────────────┐  ┌──────────────────┐  ┌──────────────────┐    │
//! │  │  LatestInvoice  │  │    InvoiceRow    │  │   InvoiceForm    │    │
//! │  │  ─────────────  │  │  ──────────────  │  │  ──────────────  │    │
//! │  │  amount: "$…"   │  │  amount: "$…"    │  │  amount: 123.45  │    │
//! │  │  (dashboard)    │  │  (search table)  │  │  (edit form)     │    │
//! │  └─────────────────┘  └──────────────────┘  └──────────────────┘    │
//! │                                                                     │
//! │  ┌─────────────────┐  ┌──────────────────┐  ┌──────────────────┐    │
//! │  │    CardData     │  │ CustomerSummary  │  │     Revenue      │    │
//! │  │  counts + "$…"  │  │ rollups as "$…"  │  │  month, number   │    │
//! │  └─────────────────┘  └──────────────────┘  └──────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Currency Asymmetry
//! Every list view carries currency as a pre-formatted string. The single
//! exception is [`InvoiceForm`], which pre-fills an `<input type=number>`
//! and therefore carries numeric dollars. Do not "fix" this.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Invoice Status
// =============================================================================

/// Payment status of an invoice.
///
/// Stored in the database as lowercase text (`'pending'` / `'paid'`),
/// which is also the serde wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Invoice issued, payment outstanding.
    Pending,
    /// Invoice settled in full.
    Paid,
}

impl InvoiceStatus {
    /// Returns the lowercase database/wire representation.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized status string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown invoice status: {0}")]
pub struct ParseInvoiceStatusError(String);

impl FromStr for InvoiceStatus {
    type Err = ParseInvoiceStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(ParseInvoiceStatusError(other.to_string())),
        }
    }
}

// =============================================================================
// Read Models
// =============================================================================

/// A point in the monthly revenue chart.
///
/// Denormalized, pre-aggregated read model straight from the `revenue`
/// table; no foreign keys, no shaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Revenue {
    /// Month label, e.g. `"Jan"`.
    pub month: String,
    /// Revenue for the month in whole dollars (chart axis value).
    pub revenue: i32,
}

/// One of the five most recent invoices shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub email: String,
    /// Pre-formatted currency string, e.g. `"$250.00"`.
    pub amount: String,
}

/// One row of the searchable, paginated invoice table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRow {
    pub id: Uuid,
    /// Pre-formatted currency string, e.g. `"$250.00"`.
    pub amount: String,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Invoice shape for pre-filling the edit form.
///
/// `amount` is numeric dollars (cents / 100) because it populates a number
/// input; this is the one place currency leaves the layer unformatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceForm {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Amount in major units, e.g. `123.45`.
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Customer id/name pair for the invoice form's customer dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CustomerField {
    pub id: Uuid,
    pub name: String,
}

/// A customer plus invoice rollups, one row of the customers table.
///
/// Produced by the aggregation join; the sums are coalesced to zero for
/// customers with no invoices, so they render as `"$0.00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    /// Pre-formatted sum of pending invoice amounts.
    pub total_pending: String,
    /// Pre-formatted sum of paid invoice amounts.
    pub total_paid: String,
}

/// Per-request dashboard counters (not persisted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    pub invoice_count: i64,
    pub customer_count: i64,
    /// Pre-formatted sum of all paid invoice amounts.
    pub total_paid: String,
    /// Pre-formatted sum of all pending invoice amounts.
    pub total_pending: String,
}

// =============================================================================
// Write Models
// =============================================================================

/// Input shape for creating or updating an invoice.
///
/// The amount arrives in cents ([`Money`]); the write paths bind it as-is,
/// there is no major-unit conversion on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub customer_id: Uuid,
    pub amount: Money,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(InvoiceStatus::Pending.as_str(), "pending");
        assert_eq!(InvoiceStatus::Paid.as_str(), "paid");
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [InvoiceStatus::Pending, InvoiceStatus::Paid] {
            assert_eq!(status.as_str().parse::<InvoiceStatus>(), Ok(status));
        }
        assert!("overdue".parse::<InvoiceStatus>().is_err());
        assert!("Paid".parse::<InvoiceStatus>().is_err());
    }

    #[test]
    fn test_status_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Paid).unwrap(),
            "\"paid\""
        );
        let parsed: InvoiceStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, InvoiceStatus::Pending);
    }

    #[test]
    fn test_card_data_serializes_plain() {
        // Outbound contract: plain data object with formatted strings
        let card = CardData {
            invoice_count: 2,
            customer_count: 1,
            total_paid: "$5.00".to_string(),
            total_pending: "$3.00".to_string(),
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["total_paid"], "$5.00");
        assert_eq!(json["invoice_count"], 2);
    }
}
