//! User seeding.
//!
//! Fixture passwords are bcrypt-hashed before insert, so the plaintext is
//! never written to the database.

use acme_core::hash_password_with_cost;
use sqlx::PgPool;
use tokio::task::{self, JoinSet};

use super::error::GroupError;
use super::models::UserSeed;
use super::schema::{ensure_users_table, ensure_uuid_extension};
use super::settle;

/// Skips rows whose `id` already exists. A new `id` with a taken `email`
/// still violates the unique constraint and fails the group.
pub const INSERT_USER: &str = r#"
    INSERT INTO users (id, name, email, password)
    VALUES ($1, $2, $3, $4)
    ON CONFLICT (id) DO NOTHING"#;

/// Ensures the `users` table and inserts `users` concurrently, returning the
/// number of rows actually inserted.
pub async fn seed_users(
    db: &PgPool,
    users: &[UserSeed],
    bcrypt_cost: u32,
) -> Result<u64, GroupError> {
    ensure_uuid_extension(db).await?;
    ensure_users_table(db).await?;

    let mut inserts = JoinSet::new();
    for user in users.iter().cloned() {
        let db = db.clone();
        inserts.spawn(async move { insert_user(&db, user, bcrypt_cost).await });
    }

    settle(inserts).await
}

async fn insert_user(db: &PgPool, user: UserSeed, bcrypt_cost: u32) -> Result<u64, GroupError> {
    let UserSeed {
        id,
        name,
        email,
        password,
    } = user;

    // bcrypt is CPU-bound
    let hashed = task::spawn_blocking(move || hash_password_with_cost(&password, bcrypt_cost))
        .await?
        .map_err(|e| GroupError::Password(e.error.to_string()))?;

    let result = sqlx::query(INSERT_USER)
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(hashed)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
