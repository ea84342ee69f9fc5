//! Pool construction, schema DDL, and seed data.

use crate::error::AppError;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create the example table if absent. The UNIQUE constraint on `name` is
/// the authoritative enforcement of the name invariant; the handler-level
/// pre-check only owns the canonical error message.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS example (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Insert the two starter rows when the table is empty. A populated store is
/// left as-is, so restarting the service never duplicates them.
pub async fn seed(pool: &SqlitePool) -> Result<(), AppError> {
    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM example LIMIT 1")
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Ok(());
    }
    for name in ["Example 1", "Example 2"] {
        sqlx::query("INSERT INTO example (name) VALUES (?1)")
            .bind(name)
            .execute(pool)
            .await?;
    }
    tracing::info!("seeded example table");
    Ok(())
}

/// Connect, create schema, seed. The usual startup path.
pub async fn init(database_url: &str) -> Result<SqlitePool, AppError> {
    let pool = connect(database_url).await?;
    ensure_schema(&pool).await?;
    seed(&pool).await?;
    Ok(pool)
}
