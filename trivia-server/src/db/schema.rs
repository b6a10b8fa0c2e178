//! Table bootstrap for the trivia store
//!
//! Idempotent `CREATE TABLE IF NOT EXISTS`; there is no versioning.

use sqlx::PgPool;

/// Create the `categories` and `questions` tables if they are missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring trivia schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // category is not a foreign key; orphaned ids are tolerated
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category TEXT,
            difficulty INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Trivia schema ready");
    Ok(())
}
