//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  Postgres Error (sqlx::Error)                                       │
//! │       │                                                             │
//! │       ├──► tracing::error!  ← full driver detail, server-side only  │
//! │       ▼                                                             │
//! │  DbError::Query { operation } ← Display: "Failed to fetch …."       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Frontend shows a generic failure naming the operation              │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Policy, Everywhere
//! Raw driver errors never cross the repository boundary in the default
//! string rendering. The cause is still reachable for operators - through
//! the `tracing` log emitted at wrap time and through
//! [`std::error::Error::source`] - but every repository method renders the
//! same way: `"Failed to <operation>."`. No retries happen at this layer;
//! a transient failure surfaces immediately and the caller owns any
//! backoff policy.

use thiserror::Error;
use tracing::error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// No connection string configured.
    ///
    /// ## When This Occurs
    /// - Neither `POSTGRES_URL` nor `DATABASE_URL` is set (or both empty)
    ///
    /// Raised when configuration is first resolved, before any network
    /// call is attempted. Not retried automatically.
    #[error("Missing database connection string. Set POSTGRES_URL (preferred) or DATABASE_URL in the environment.")]
    MissingConnectionString,

    /// The configured connection string could not be parsed.
    #[error("Invalid database connection string")]
    InvalidConnectionString(#[source] sqlx::Error),

    /// A query failed during execution.
    ///
    /// ## When This Occurs
    /// - Network failure, statement error, constraint violation
    ///
    /// The `operation` names what the caller was doing ("fetch invoices",
    /// "fetch card data", ...). The driver cause is carried as `source`
    /// but never shown in the Display rendering.
    #[error("Failed to {operation}.")]
    Query {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Migration failed.
    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A write path targeted a row that does not exist.
    ///
    /// Read lookups represent absence as `Ok(None)` instead; this variant
    /// is only produced by UPDATE/DELETE statements affecting zero rows.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        DbError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Scoped wrapping of driver errors into the domain envelope.
///
/// Every repository method ends with `.for_operation("…")`: the raw error
/// is logged once with full detail, then replaced by a [`DbError::Query`]
/// whose Display names only the failed operation.
pub(crate) trait SqlxResultExt<T> {
    fn for_operation(self, operation: &'static str) -> DbResult<T>;
}

impl<T> SqlxResultExt<T> for Result<T, sqlx::Error> {
    fn for_operation(self, operation: &'static str) -> DbResult<T> {
        self.map_err(|source| {
            error!(operation, error = %source, "Database error");
            DbError::Query { operation, source }
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_query_display_names_operation_only() {
        let err = DbError::Query {
            operation: "fetch invoices",
            source: sqlx::Error::PoolClosed,
        };
        assert_eq!(err.to_string(), "Failed to fetch invoices.");
        // Driver detail lives behind source(), not in the rendering
        assert!(err.source().is_some());
    }

    #[test]
    fn test_missing_connection_string_names_both_keys() {
        let msg = DbError::MissingConnectionString.to_string();
        assert!(msg.contains("POSTGRES_URL"));
        assert!(msg.contains("DATABASE_URL"));
    }

    #[test]
    fn test_for_operation_wraps() {
        let result: Result<(), sqlx::Error> = Err(sqlx::Error::PoolClosed);
        let wrapped = result.for_operation("fetch card data");
        assert_eq!(
            wrapped.unwrap_err().to_string(),
            "Failed to fetch card data."
        );
    }

    #[test]
    fn test_not_found() {
        let err = DbError::not_found("Invoice", "abc-123");
        assert_eq!(err.to_string(), "Invoice not found: abc-123");
    }
}
