//! Table definitions.
//!
//! Every statement is idempotent: it creates what is missing and leaves an
//! existing extension or table (and its rows) untouched.

use sqlx::PgPool;
use tracing::debug;

pub const CREATE_UUID_EXTENSION: &str = r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#;

pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )"#;

pub const CREATE_CUSTOMERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS customers (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        image_url VARCHAR(255) NOT NULL
    )"#;

pub const CREATE_INVOICES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id UUID DEFAULT uuid_generate_v4() PRIMARY KEY,
        customer_id UUID NOT NULL,
        amount INT NOT NULL,
        status VARCHAR(255) NOT NULL,
        date DATE NOT NULL
    )"#;

pub const CREATE_REVENUE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS revenue (
        month VARCHAR(4) NOT NULL UNIQUE,
        revenue INT NOT NULL
    )"#;

/// Enables `uuid-ossp`, which provides the `uuid_generate_v4()` column default.
pub async fn ensure_uuid_extension(db: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_UUID_EXTENSION).execute(db).await?;
    debug!("uuid-ossp extension ensured");
    Ok(())
}

pub async fn ensure_users_table(db: &PgPool) -> Result<(), sqlx::Error> {
    ensure_table(db, "users", CREATE_USERS_TABLE).await
}

pub async fn ensure_customers_table(db: &PgPool) -> Result<(), sqlx::Error> {
    ensure_table(db, "customers", CREATE_CUSTOMERS_TABLE).await
}

pub async fn ensure_invoices_table(db: &PgPool) -> Result<(), sqlx::Error> {
    ensure_table(db, "invoices", CREATE_INVOICES_TABLE).await
}

pub async fn ensure_revenue_table(db: &PgPool) -> Result<(), sqlx::Error> {
    ensure_table(db, "revenue", CREATE_REVENUE_TABLE).await
}

async fn ensure_table(db: &PgPool, table: &str, ddl: &str) -> Result<(), sqlx::Error> {
    sqlx::query(ddl).execute(db).await?;
    debug!(table, "table ensured");
    Ok(())
}
