//! Database seeding for the Acme dashboard.
//!
//! A run seeds four groups in a fixed order (users, customers, invoices,
//! revenue). Each group first ensures its table exists, then issues one
//! insert per record concurrently and waits for all of them to settle before
//! the next group starts. Rows whose key already exists are skipped, nothing
//! is ever updated or deleted, and there is no rollback: a failed insert
//! leaves the rows that did succeed in place.
//!
//! The first fault aborts the run; groups after it are not attempted.

pub mod customers;
pub mod error;
pub mod invoices;
pub mod models;
pub mod placeholder;
pub mod revenue;
pub mod schema;
pub mod users;

use std::time::Instant;

use acme_config::SeedConfig;
use sqlx::PgPool;
use tokio::task::JoinSet;
use tracing::{error, info, instrument, warn};

pub use error::{GroupError, SeedError, SeedGroup};
pub use models::{CustomerSeed, InvoiceSeed, RevenueSeed, SeedData, UserSeed};

/// Rows inserted per group during one run; skipped conflicts are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: u64,
    pub customers: u64,
    pub invoices: u64,
    pub revenue: u64,
}

/// Current row count of each seeded table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub users: i64,
    pub customers: i64,
    pub invoices: i64,
    pub revenue: i64,
}

/// Seeds the dashboard tables through a shared pool.
#[derive(Clone, Debug)]
pub struct Seeder {
    pool: PgPool,
    config: SeedConfig,
}

impl Seeder {
    pub fn new(pool: PgPool, config: SeedConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Runs all four groups in order against `data`.
    #[instrument(skip_all, fields(records = data.len(), invoice_ids = %self.config.invoice_ids))]
    pub async fn seed(&self, data: &SeedData) -> Result<SeedSummary, SeedError> {
        info!("Starting database seeding...");
        let start_time = Instant::now();

        let mut summary = SeedSummary::default();

        for group in SeedGroup::ALL {
            let inserted = self.seed_group(group, data).await.map_err(|e| {
                error!(group = %group, error = %e, "Error seeding {}", group);
                SeedError::new(group, e)
            })?;

            match group {
                SeedGroup::Users => summary.users = inserted,
                SeedGroup::Customers => summary.customers = inserted,
                SeedGroup::Invoices => summary.invoices = inserted,
                SeedGroup::Revenue => summary.revenue = inserted,
            }

            info!(group = %group, inserted, "✓ {} seeded", capitalize(group.as_str()));
        }

        info!(
            elapsed_ms = %start_time.elapsed().as_millis(),
            "Database seeding completed successfully"
        );

        Ok(summary)
    }

    async fn seed_group(&self, group: SeedGroup, data: &SeedData) -> Result<u64, GroupError> {
        match group {
            SeedGroup::Users => {
                users::seed_users(&self.pool, &data.users, self.config.bcrypt_cost).await
            }
            SeedGroup::Customers => customers::seed_customers(&self.pool, &data.customers).await,
            SeedGroup::Invoices => {
                invoices::seed_invoices(&self.pool, &data.invoices, self.config.invoice_ids).await
            }
            SeedGroup::Revenue => revenue::seed_revenue(&self.pool, &data.revenue).await,
        }
    }

    /// Creates the extension and all four tables without inserting anything.
    pub async fn ensure_schema(&self) -> Result<(), SeedError> {
        let db = &self.pool;

        schema::ensure_uuid_extension(db)
            .await
            .map_err(|e| SeedError::new(SeedGroup::Users, e))?;
        schema::ensure_users_table(db)
            .await
            .map_err(|e| SeedError::new(SeedGroup::Users, e))?;
        schema::ensure_customers_table(db)
            .await
            .map_err(|e| SeedError::new(SeedGroup::Customers, e))?;
        schema::ensure_invoices_table(db)
            .await
            .map_err(|e| SeedError::new(SeedGroup::Invoices, e))?;
        schema::ensure_revenue_table(db)
            .await
            .map_err(|e| SeedError::new(SeedGroup::Revenue, e))?;

        info!("Schema ensured");
        Ok(())
    }

    /// Counts rows in each seeded table. The tables must already exist.
    pub async fn table_counts(&self) -> Result<TableCounts, sqlx::Error> {
        Ok(TableCounts {
            users: self.count("SELECT COUNT(*) FROM users").await?,
            customers: self.count("SELECT COUNT(*) FROM customers").await?,
            invoices: self.count("SELECT COUNT(*) FROM invoices").await?,
            revenue: self.count("SELECT COUNT(*) FROM revenue").await?,
        })
    }

    async fn count(&self, query: &'static str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(query)
            .fetch_one(&self.pool)
            .await
    }
}

/// Waits for every insert in the set to settle and sums the rows inserted.
///
/// A failing insert does not cancel the others; once all have finished, the
/// first fault observed is returned.
async fn settle(mut inserts: JoinSet<Result<u64, GroupError>>) -> Result<u64, GroupError> {
    let mut inserted = 0;
    let mut first_error = None;

    while let Some(joined) = inserts.join_next().await {
        match joined.map_err(GroupError::from).and_then(|outcome| outcome) {
            Ok(rows) => inserted += rows,
            Err(e) if first_error.is_none() => first_error = Some(e),
            Err(e) => warn!(error = %e, "Additional insert failure"),
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(inserted),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_settle_sums_rows() {
        let mut set: JoinSet<Result<u64, GroupError>> = JoinSet::new();
        for rows in [1, 0, 1] {
            set.spawn(async move { Ok(rows) });
        }
        assert_eq!(settle(set).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_settle_waits_for_all_and_reports_fault() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let finished = Arc::new(AtomicUsize::new(0));
        let mut set: JoinSet<Result<u64, GroupError>> = JoinSet::new();

        set.spawn(async { Err(GroupError::Database(sqlx::Error::PoolTimedOut)) });
        for _ in 0..3 {
            let finished = finished.clone();
            set.spawn(async move {
                tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                finished.fetch_add(1, Ordering::SeqCst);
                Ok(1)
            });
        }

        let err = settle(set).await.unwrap_err();
        assert!(matches!(err, GroupError::Database(sqlx::Error::PoolTimedOut)));
        assert_eq!(finished.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_settle_turns_panics_into_task_errors() {
        let mut set: JoinSet<Result<u64, GroupError>> = JoinSet::new();
        set.spawn(async { panic!("insert task blew up") });

        let err = settle(set).await.unwrap_err();
        assert!(matches!(err, GroupError::Task(_)));
    }

    #[tokio::test]
    async fn test_settle_empty_group() {
        assert_eq!(settle(JoinSet::new()).await.unwrap(), 0);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("users"), "Users");
        assert_eq!(capitalize(""), "");
    }
}
