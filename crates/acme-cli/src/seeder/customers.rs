use sqlx::PgPool;
use tokio::task::JoinSet;

use super::error::GroupError;
use super::models::CustomerSeed;
use super::schema::{ensure_customers_table, ensure_uuid_extension};
use super::settle;

pub const INSERT_CUSTOMER: &str = r#"
    INSERT INTO customers (id, name, email, image_url)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (id) DO NOTHING"#;

/// Ensures the `customers` table and inserts `customers` concurrently.
pub async fn seed_customers(db: &PgPool, customers: &[CustomerSeed]) -> Result<u64, GroupError> {
    ensure_uuid_extension(db).await?;
    ensure_customers_table(db).await?;

    let mut inserts: JoinSet<Result<u64, GroupError>> = JoinSet::new();
    for customer in customers.iter().cloned() {
        let db = db.clone();
        inserts.spawn(async move {
            let result = sqlx::query(INSERT_CUSTOMER)
                .bind(customer.id)
                .bind(customer.name)
                .bind(customer.email)
                .bind(customer.image_url)
                .execute(&db)
                .await?;
            Ok(result.rows_affected())
        });
    }

    settle(inserts).await
}
