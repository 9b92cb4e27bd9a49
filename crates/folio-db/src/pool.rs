//! # Database Pool Management
//!
//! Connection configuration and pool creation for PostgreSQL.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Database Connection Lifecycle                     │
//! │                                                                     │
//! │  Process startup (composition root)                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbConfig::from_env() ← POSTGRES_URL / DATABASE_URL / POSTGRES_SSL  │
//! │       │        fails fast: MissingConnectionString                  │
//! │       ▼                                                             │
//! │  Database::connect(config) ← parse URL, decide TLS policy           │
//! │       │        fails fast: InvalidConnectionString                  │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────┐                        │
//! │  │            PgPool (lazy)                │                        │
//! │  │  no network I/O until the first query   │                        │
//! │  └─────────────────────────────────────────┘                        │
//! │       │                                                             │
//! │       │ shared by reference with every repository                   │
//! │       ▼                                                             │
//! │  db.invoices().filtered(…)   db.dashboard().card_data()   …         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Hidden Globals
//! There is exactly one `Database` per process, but it is an explicit
//! value constructed at the composition root and passed down, not a
//! memoized static. If construction fails, nothing is cached; the caller
//! may retry with corrected configuration.
//!
//! ## TLS Policy
//! Off-loopback hosts require TLS by default. Loopback targets (local
//! development) and an explicit `POSTGRES_SSL=false` opt out.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::env;
use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::customer::CustomerRepository;
use crate::repository::dashboard::DashboardRepository;
use crate::repository::invoice::InvoiceRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::from_env()?
///     .max_connections(10);
/// let db = Database::connect(config)?;
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Postgres connection string.
    pub url: String,

    /// Whether TLS is forced for off-loopback hosts.
    /// Default: true; `POSTGRES_SSL=false` disables.
    pub force_tls: bool,

    /// Maximum number of connections in the pool.
    /// Default: 5 (one dashboard process)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Timeout when acquiring a connection from the pool.
    /// Default: 30 seconds
    pub acquire_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,
}

impl DbConfig {
    /// Resolves configuration from the process environment.
    ///
    /// ## Resolution order
    /// 1. `POSTGRES_URL` (preferred)
    /// 2. `DATABASE_URL` (fallback, common on hosting platforms)
    ///
    /// Both absent or empty is a fatal configuration error, raised here -
    /// before any network call is attempted.
    ///
    /// `POSTGRES_SSL=false` disables forced TLS for off-loopback hosts.
    pub fn from_env() -> DbResult<Self> {
        Self::resolve(
            env::var("POSTGRES_URL").ok(),
            env::var("DATABASE_URL").ok(),
            env::var("POSTGRES_SSL").ok(),
        )
    }

    /// Pure resolution step behind [`DbConfig::from_env`].
    ///
    /// Split out so the primary/fallback and TLS opt-out rules are
    /// testable without touching process globals.
    fn resolve(
        primary: Option<String>,
        fallback: Option<String>,
        ssl: Option<String>,
    ) -> DbResult<Self> {
        let url = primary
            .filter(|s| !s.is_empty())
            .or_else(|| fallback.filter(|s| !s.is_empty()))
            .ok_or(DbError::MissingConnectionString)?;

        Ok(DbConfig {
            url,
            force_tls: ssl.as_deref() != Some("false"),
            max_connections: 5,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
        })
    }

    /// Creates a configuration from an explicit connection string.
    ///
    /// Used by tests and tooling that already hold a URL.
    pub fn new(url: impl Into<String>) -> Self {
        DbConfig {
            url: url.into(),
            force_tls: true,
            max_connections: 5,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the pool acquire timeout.
    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

/// Whether TLS must be required for the given host.
///
/// Loopback targets never force TLS; everything else does unless the
/// operator opted out via `POSTGRES_SSL=false`.
fn requires_tls(host: &str, force_tls: bool) -> bool {
    force_tls && !is_loopback(host)
}

fn is_loopback(host: &str) -> bool {
    host == "localhost"
        || host
            .parse::<IpAddr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false)
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing repository access.
///
/// Cloning is cheap (the pool is internally reference-counted); the
/// composition root constructs one `Database` and shares it with every
/// request handler. Concurrent repository calls share the pool, which is
/// responsible for parallelizing physical connections.
#[derive(Debug, Clone)]
pub struct Database {
    /// The PostgreSQL connection pool.
    pool: PgPool,
}

impl Database {
    /// Creates a database handle with a lazily-connecting pool.
    ///
    /// ## What This Does
    /// 1. Parses the connection string (fails fast on garbage, still
    ///    before any network I/O)
    /// 2. Decides the TLS policy from the target host
    /// 3. Builds the pool lazily: the first query opens the first
    ///    physical connection
    ///
    /// ## Returns
    /// * `Ok(Database)` - Ready-to-use handle
    /// * `Err(DbError::InvalidConnectionString)` - URL did not parse
    ///
    /// ## Note
    /// Call from within the async runtime: the pool registers its
    /// maintenance task on the current executor.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let db = Database::connect(DbConfig::from_env()?)?;
    /// let invoices = db.invoices().latest().await?;
    /// ```
    pub fn connect(config: DbConfig) -> DbResult<Self> {
        let options =
            PgConnectOptions::from_str(&config.url).map_err(DbError::InvalidConnectionString)?;

        let host = options.get_host().to_string();
        let ssl_mode = if requires_tls(&host, config.force_tls) {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };

        debug!(host = %host, ?ssl_mode, "Connection options configured");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_lazy_with(options.ssl_mode(ssl_mode));

        info!(
            host = %host,
            max_connections = config.max_connections,
            "Database pool created"
        );

        Ok(Database { pool })
    }

    /// Wraps an existing pool (tests and tooling).
    pub fn from_pool(pool: PgPool) -> Self {
        Database { pool }
    }

    /// Runs database migrations.
    ///
    /// Idempotent: applied migrations are tracked in `_sqlx_migrations`
    /// and skipped on subsequent runs.
    pub async fn run_migrations(&self) -> DbResult<()> {
        info!("Running database migrations");
        migrations::run_migrations(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Returns a reference to the connection pool.
    ///
    /// For advanced queries not covered by repositories. Prefer the
    /// repository methods when available.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Returns the invoice repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let page = db.invoices().filtered("lee", 1).await?;
    /// ```
    pub fn invoices(&self) -> InvoiceRepository {
        InvoiceRepository::new(self.pool.clone())
    }

    /// Returns the customer repository.
    pub fn customers(&self) -> CustomerRepository {
        CustomerRepository::new(self.pool.clone())
    }

    /// Returns the dashboard repository (revenue chart + summary cards).
    pub fn dashboard(&self) -> DashboardRepository {
        DashboardRepository::new(self.pool.clone())
    }

    /// Closes the database connection pool.
    ///
    /// The normal request path never tears the pool down; only the
    /// diagnostic tooling calls this before exiting.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_primary() {
        let config = DbConfig::resolve(
            Some("postgres://primary/db".into()),
            Some("postgres://fallback/db".into()),
            None,
        )
        .unwrap();
        assert_eq!(config.url, "postgres://primary/db");
    }

    #[test]
    fn test_resolve_falls_back() {
        let config =
            DbConfig::resolve(None, Some("postgres://fallback/db".into()), None).unwrap();
        assert_eq!(config.url, "postgres://fallback/db");

        // Empty primary counts as absent
        let config = DbConfig::resolve(
            Some(String::new()),
            Some("postgres://fallback/db".into()),
            None,
        )
        .unwrap();
        assert_eq!(config.url, "postgres://fallback/db");
    }

    #[test]
    fn test_resolve_missing_is_config_error() {
        let err = DbConfig::resolve(None, None, None).unwrap_err();
        assert!(matches!(err, DbError::MissingConnectionString));

        let err = DbConfig::resolve(Some(String::new()), Some(String::new()), None).unwrap_err();
        assert!(matches!(err, DbError::MissingConnectionString));
    }

    #[test]
    fn test_resolve_ssl_opt_out() {
        let config = DbConfig::resolve(Some("postgres://db".into()), None, None).unwrap();
        assert!(config.force_tls);

        let config =
            DbConfig::resolve(Some("postgres://db".into()), None, Some("false".into())).unwrap();
        assert!(!config.force_tls);

        // Anything other than the literal "false" leaves TLS forced
        let config =
            DbConfig::resolve(Some("postgres://db".into()), None, Some("no".into())).unwrap();
        assert!(config.force_tls);
    }

    #[test]
    fn test_tls_policy() {
        // Loopback never forces TLS
        assert!(!requires_tls("localhost", true));
        assert!(!requires_tls("127.0.0.1", true));
        assert!(!requires_tls("::1", true));

        // Off-loopback requires TLS unless opted out
        assert!(requires_tls("db.example.com", true));
        assert!(requires_tls("10.0.0.7", true));
        assert!(!requires_tls("db.example.com", false));
    }

    #[test]
    fn test_connect_rejects_garbage_url() {
        let err = Database::connect(DbConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, DbError::InvalidConnectionString(_)));
    }

    #[tokio::test]
    async fn test_connect_is_lazy() {
        // No server behind this address; construction must still succeed
        // because the pool only dials on first use. (The pool spawns its
        // maintenance task on the runtime, hence the async test.)
        let db = Database::connect(DbConfig::new("postgres://nobody@192.0.2.1/nope")).unwrap();
        assert!(!db.pool().is_closed());
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("postgres://localhost/folio")
            .max_connections(10)
            .min_connections(2);

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
    }
}
