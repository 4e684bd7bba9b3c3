//! Invoice seeding.
//!
//! Fixture invoices carry no id. [`InvoiceIds::Generated`] leaves the id to
//! the column default, so `ON CONFLICT (id)` never fires and every run
//! appends the whole fixture again. [`InvoiceIds::Deterministic`] derives a
//! UUIDv5 from each row's position and contents, so a re-run conflicts on
//! `id` and skips rows already present.

use acme_config::InvoiceIds;
use sqlx::PgPool;
use tokio::task::JoinSet;
use uuid::Uuid;

use super::error::GroupError;
use super::models::InvoiceSeed;
use super::schema::{ensure_invoices_table, ensure_uuid_extension};
use super::settle;

pub const INSERT_INVOICE: &str = r#"
    INSERT INTO invoices (customer_id, amount, status, date)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (id) DO NOTHING"#;

pub const INSERT_INVOICE_WITH_ID: &str = r#"
    INSERT INTO invoices (id, customer_id, amount, status, date)
    VALUES ($1, $2, $3, $4, $5)
    ON CONFLICT (id) DO NOTHING"#;

const INVOICE_NAMESPACE: Uuid = Uuid::from_u128(0x6f1d2c3a_8b4e_5a7f_9c0d_1e2f3a4b5c6d);

/// Stable id for the fixture invoice at `index`.
pub fn deterministic_invoice_id(index: usize, invoice: &InvoiceSeed) -> Uuid {
    let name = format!(
        "{}:{}:{}:{}:{}",
        index, invoice.customer_id, invoice.amount, invoice.status, invoice.date
    );
    Uuid::new_v5(&INVOICE_NAMESPACE, name.as_bytes())
}

/// Ensures the `invoices` table and inserts `invoices` concurrently.
pub async fn seed_invoices(
    db: &PgPool,
    invoices: &[InvoiceSeed],
    ids: InvoiceIds,
) -> Result<u64, GroupError> {
    ensure_uuid_extension(db).await?;
    ensure_invoices_table(db).await?;

    let mut inserts: JoinSet<Result<u64, GroupError>> = JoinSet::new();
    for (index, invoice) in invoices.iter().cloned().enumerate() {
        let db = db.clone();
        let id = match ids {
            InvoiceIds::Generated => None,
            InvoiceIds::Deterministic => Some(deterministic_invoice_id(index, &invoice)),
        };
        inserts.spawn(async move { insert_invoice(&db, id, invoice).await });
    }

    settle(inserts).await
}

async fn insert_invoice(
    db: &PgPool,
    id: Option<Uuid>,
    invoice: InvoiceSeed,
) -> Result<u64, GroupError> {
    let query = match id {
        Some(id) => sqlx::query(INSERT_INVOICE_WITH_ID).bind(id),
        None => sqlx::query(INSERT_INVOICE),
    };

    let result = query
        .bind(invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
