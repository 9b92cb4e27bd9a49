//! # Seed Data Generator
//!
//! Populates the database with placeholder customers, invoices and the
//! monthly revenue table for development.
//!
//! ## Usage
//! ```bash
//! # POSTGRES_URL (or DATABASE_URL) must point at a dev database
//! cargo run -p folio-db --bin seed
//! ```
//!
//! ## Generated Data
//! - 6 placeholder customers (upserted by email, safe to re-run)
//! - 13 invoices with amounts in cents across pending/paid
//! - 12 monthly revenue points (upserted by month)
//!
//! Invoices are plain inserts; re-running the seed adds another batch.
//! This is development tooling, not a fixture manager.

use chrono::NaiveDate;
use folio_db::{Database, DbConfig, DbResult};
use tracing::info;
use uuid::Uuid;

/// Placeholder customers: (name, email, image_url).
const CUSTOMERS: &[(&str, &str, &str)] = &[
    (
        "Evil Rabbit",
        "evil@rabbit.com",
        "/customers/evil-rabbit.png",
    ),
    (
        "Delba de Oliveira",
        "delba@oliveira.com",
        "/customers/delba-de-oliveira.png",
    ),
    (
        "Lee Robinson",
        "lee@robinson.com",
        "/customers/lee-robinson.png",
    ),
    (
        "Michael Novotny",
        "michael@novotny.com",
        "/customers/michael-novotny.png",
    ),
    ("Amy Burns", "amy@burns.com", "/customers/amy-burns.png"),
    (
        "Balazs Orban",
        "balazs@orban.com",
        "/customers/balazs-orban.png",
    ),
];

/// Placeholder invoices: (customer index, amount in cents, status, date).
const INVOICES: &[(usize, i64, &str, (i32, u32, u32))] = &[
    (0, 15795, "pending", (2022, 12, 6)),
    (1, 20348, "pending", (2022, 11, 14)),
    (4, 3040, "paid", (2022, 10, 29)),
    (3, 44800, "paid", (2023, 9, 10)),
    (5, 34577, "pending", (2023, 8, 5)),
    (2, 54246, "pending", (2023, 7, 16)),
    (0, 666, "pending", (2023, 6, 27)),
    (3, 32545, "paid", (2023, 6, 9)),
    (4, 1250, "paid", (2023, 6, 17)),
    (5, 8546, "paid", (2023, 6, 7)),
    (1, 500, "paid", (2023, 8, 19)),
    (5, 8945, "paid", (2023, 6, 3)),
    (2, 1000, "paid", (2022, 6, 5)),
];

/// Monthly revenue points: (month, revenue in whole dollars).
const REVENUE: &[(&str, i32)] = &[
    ("Jan", 2000),
    ("Feb", 1800),
    ("Mar", 2200),
    ("Apr", 2500),
    ("May", 2300),
    ("Jun", 3200),
    ("Jul", 3500),
    ("Aug", 3700),
    ("Sep", 2500),
    ("Oct", 2800),
    ("Nov", 3000),
    ("Dec", 4800),
];

#[tokio::main]
async fn main() -> DbResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let db = Database::connect(DbConfig::from_env()?)?;
    db.run_migrations().await?;

    let customer_ids = seed_customers(&db).await?;
    seed_invoices(&db, &customer_ids).await?;
    seed_revenue(&db).await?;

    info!(
        customers = CUSTOMERS.len(),
        invoices = INVOICES.len(),
        revenue_months = REVENUE.len(),
        "Seed complete"
    );

    db.close().await;
    Ok(())
}

/// Upserts the placeholder customers and returns their ids in seed order.
async fn seed_customers(db: &Database) -> DbResult<Vec<Uuid>> {
    let mut ids = Vec::with_capacity(CUSTOMERS.len());

    for (name, email, image_url) in CUSTOMERS {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO customers (name, email, image_url) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name, \
                 image_url = EXCLUDED.image_url \
             RETURNING id",
        )
        .bind(*name)
        .bind(*email)
        .bind(*image_url)
        .fetch_one(db.pool())
        .await
        .map_err(|source| folio_db::DbError::Query {
            operation: "seed customers",
            source,
        })?;

        ids.push(id);
    }

    info!(count = ids.len(), "Customers seeded");
    Ok(ids)
}

async fn seed_invoices(db: &Database, customer_ids: &[Uuid]) -> DbResult<()> {
    for (customer_idx, amount, status, (y, m, d)) in INVOICES {
        let date = NaiveDate::from_ymd_opt(*y, *m, *d).expect("valid seed date");

        sqlx::query(
            "INSERT INTO invoices (customer_id, amount, status, date) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(customer_ids[*customer_idx])
        .bind(*amount)
        .bind(*status)
        .bind(date)
        .execute(db.pool())
        .await
        .map_err(|source| folio_db::DbError::Query {
            operation: "seed invoices",
            source,
        })?;
    }

    info!(count = INVOICES.len(), "Invoices seeded");
    Ok(())
}

async fn seed_revenue(db: &Database) -> DbResult<()> {
    for (month, revenue) in REVENUE {
        sqlx::query(
            "INSERT INTO revenue (month, revenue) \
             VALUES ($1, $2) \
             ON CONFLICT (month) DO UPDATE SET revenue = EXCLUDED.revenue",
        )
        .bind(*month)
        .bind(*revenue)
        .execute(db.pool())
        .await
        .map_err(|source| folio_db::DbError::Query {
            operation: "seed revenue",
            source,
        })?;
    }

    info!(count = REVENUE.len(), "Revenue seeded");
    Ok(())
}
