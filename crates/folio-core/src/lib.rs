//! # folio-core: Pure Business Logic for Folio
//!
//! This crate is the **heart** of the Folio dashboard. It contains the
//! display-shaping rules and domain types as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Folio Data Flow                              │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                 Dashboard Frontend                            │  │
//! │  │    Cards ──► Revenue Chart ──► Invoice Table ──► Edit Form    │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                folio-db (Query Layer)                         │  │
//! │  │    fetch_revenue, fetch_filtered_invoices, fetch_card_data    │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │               ★ folio-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │   ┌───────────┐   ┌────────────┐   ┌───────────────────────┐  │  │
//! │  │   │   money   │   │ pagination │   │        types          │  │  │
//! │  │   │   Money   │   │   offset   │   │ InvoiceRow, CardData  │  │  │
//! │  │   │  $ format │   │ totalpages │   │ CustomerSummary, ...  │  │  │
//! │  │   └───────────┘   └────────────┘   └───────────────────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cents arithmetic and USD formatting
//! - [`pagination`] - Fixed page-size offset and page-count math
//! - [`types`] - View records handed to the frontend
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) until the
//!    display boundary; lists render formatted strings, the edit form alone
//!    receives a numeric major-unit value
//!
//! ## Example Usage
//!
//! ```rust
//! use folio_core::money::{format_currency, Money};
//! use folio_core::pagination::{offset, total_pages};
//!
//! // Currency is formatted exactly once, at the display boundary
//! assert_eq!(format_currency(12345), "$123.45");
//!
//! // The edit form is the single numeric major-unit path
//! assert_eq!(Money::from_cents(12345).to_dollars(), 123.45);
//!
//! // Invoice lists are paged 6 at a time
//! assert_eq!(offset(3), 12);
//! assert_eq!(total_pages(7), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod money;
pub mod pagination;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use money::{format_currency, Money};
pub use pagination::{offset, total_pages, ITEMS_PER_PAGE};
pub use types::{
    CardData, CustomerField, CustomerSummary, InvoiceDraft, InvoiceForm, InvoiceRow,
    InvoiceStatus, LatestInvoice, ParseInvoiceStatusError, Revenue,
};
