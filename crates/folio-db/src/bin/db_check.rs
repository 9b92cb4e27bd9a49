//! # Database Connectivity Check
//!
//! Diagnostic tool: resolves configuration, connects, runs `SELECT 1` and
//! reports migration status. This is the one code path that explicitly
//! tears the pool down.
//!
//! ## Usage
//! ```bash
//! cargo run -p folio-db --bin db-check
//! ```
//!
//! ## Exit Codes
//! - `0` - connection OK
//! - `2` - configuration error (no/invalid connection string)
//! - `3` - connection or query failed

use std::process::ExitCode;

use folio_db::migrations;
use folio_db::{Database, DbConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "Configuration error");
            return ExitCode::from(2);
        }
    };

    let db = match Database::connect(config) {
        Ok(db) => db,
        Err(err) => {
            error!(%err, "Configuration error");
            return ExitCode::from(2);
        }
    };

    // The pool is lazy; this is the first real network round trip.
    if !db.health_check().await {
        error!("DB connection failed");
        db.close().await;
        return ExitCode::from(3);
    }
    info!("DB connection OK");

    match migrations::migration_status(db.pool()).await {
        Ok((total, applied)) => {
            info!(total, applied, "Migration status");
        }
        Err(err) => {
            error!(%err, "Could not read migration status");
        }
    }

    db.close().await;
    ExitCode::SUCCESS
}
