//! Storage operations for the example table.

use crate::error::AppError;
use crate::model::Example;
use sqlx::SqlitePool;

const MAX_NAME_LEN: usize = 50;

pub struct ExampleService;

impl ExampleService {
    /// All rows in primary-key order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Example>, AppError> {
        let rows = sqlx::query_as::<_, Example>("SELECT id, name FROM example ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// One row by id, or None.
    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Example>, AppError> {
        let row = sqlx::query_as::<_, Example>("SELECT id, name FROM example WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create(pool: &SqlitePool, name: &str) -> Result<Example, AppError> {
        validate_name(name)?;
        if Self::name_taken(pool, name, None).await? {
            return Err(AppError::DuplicateName);
        }
        let row = sqlx::query_as::<_, Example>(
            "INSERT INTO example (name) VALUES (?1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(pool)
        .await
        .map_err(map_unique_violation)?;
        tracing::debug!(id = row.id, "inserted example");
        Ok(row)
    }

    /// Overwrite the name at `id`. NotFound when no row matches.
    pub async fn update(pool: &SqlitePool, id: i64, name: &str) -> Result<Example, AppError> {
        validate_name(name)?;
        if Self::name_taken(pool, name, Some(id)).await? {
            return Err(AppError::DuplicateName);
        }
        let row = sqlx::query_as::<_, Example>(
            "UPDATE example SET name = ?1 WHERE id = ?2 RETURNING id, name",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(map_unique_violation)?;
        row.ok_or(AppError::NotFound)
    }

    /// Delete at most one row. Reports whether a row was removed.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM example WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Pre-check for the name invariant. `exclude_id` skips the record being
    /// updated so self-renames are not flagged.
    async fn name_taken(
        pool: &SqlitePool,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, AppError> {
        let found: Option<i64> = match exclude_id {
            Some(id) => {
                sqlx::query_scalar("SELECT id FROM example WHERE name = ?1 AND id <> ?2")
                    .bind(name)
                    .bind(id)
                    .fetch_optional(pool)
                    .await?
            }
            None => {
                sqlx::query_scalar("SELECT id FROM example WHERE name = ?1")
                    .bind(name)
                    .fetch_optional(pool)
                    .await?
            }
        };
        Ok(found.is_some())
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "name exceeds {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(())
}

/// The table constraint stays authoritative: a duplicate that races past the
/// pre-check still surfaces as the duplicate-name error, not a 500.
fn map_unique_violation(e: sqlx::Error) -> AppError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => AppError::DuplicateName,
        _ => AppError::Db(e),
    }
}
