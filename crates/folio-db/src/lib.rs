//! # folio-db: Database Layer for Folio
//!
//! This crate provides database access for the Folio invoice dashboard.
//! It uses PostgreSQL with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Folio Data Flow                              │
//! │                                                                     │
//! │  Page handler (invoices search, dashboard cards, edit form)         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                     folio-db (THIS CRATE)                     │  │
//! │  │                                                               │  │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌──────────────┐    │  │
//! │  │   │   Database    │   │  Repositories │   │  Migrations  │    │  │
//! │  │   │   (pool.rs)   │   │ (invoice.rs)  │   │  (embedded)  │    │  │
//! │  │   │               │   │               │   │              │    │  │
//! │  │   │ PgPool (lazy) │◄──│ InvoiceRepo   │   │ 0001_initial │    │  │
//! │  │   │ TLS policy    │   │ CustomerRepo  │   │  _schema.sql │    │  │
//! │  │   │ env config    │   │ DashboardRepo │   │              │    │  │
//! │  │   └───────────────┘   └───────────────┘   └──────────────┘    │  │
//! │  │                                                               │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  PostgreSQL: invoices, customers, revenue                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection configuration and pool creation
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types and the query error envelope
//! - [`repository`] - Repository implementations (invoice, customer, dashboard)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_db::{Database, DbConfig};
//!
//! // Composition root: resolve config, build the one shared handle
//! let db = Database::connect(DbConfig::from_env()?)?;
//!
//! // Dashboard page
//! let revenue = db.dashboard().revenue().await?;
//! let cards = db.dashboard().card_data().await?;
//! let recent = db.invoices().latest().await?;
//!
//! // Invoices page
//! let rows = db.invoices().filtered(&query, page).await?;
//! let pages = db.invoices().pages(&query).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::dashboard::DashboardRepository;
pub use repository::invoice::InvoiceRepository;
