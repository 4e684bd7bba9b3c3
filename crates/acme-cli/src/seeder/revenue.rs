use sqlx::PgPool;
use tokio::task::JoinSet;

use super::error::GroupError;
use super::models::RevenueSeed;
use super::schema::ensure_revenue_table;
use super::settle;

pub const INSERT_REVENUE: &str = r#"
    INSERT INTO revenue (month, revenue)
    VALUES ($1, $2)
    ON CONFLICT (month) DO NOTHING"#;

/// Ensures the `revenue` table and inserts `revenue` concurrently.
///
/// The table has no UUID column, so the extension is not needed here.
pub async fn seed_revenue(db: &PgPool, revenue: &[RevenueSeed]) -> Result<u64, GroupError> {
    ensure_revenue_table(db).await?;

    let mut inserts: JoinSet<Result<u64, GroupError>> = JoinSet::new();
    for rev in revenue.iter().cloned() {
        let db = db.clone();
        inserts.spawn(async move {
            let result = sqlx::query(INSERT_REVENUE)
                .bind(rev.month)
                .bind(rev.revenue)
                .execute(&db)
                .await?;
            Ok(result.rows_affected())
        });
    }

    settle(inserts).await
}
