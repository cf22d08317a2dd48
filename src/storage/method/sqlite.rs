//! SQLite-backed method repository.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

use crate::error_handling::DatabaseError;
use crate::models::Method;
use crate::utils::chunk_slice;

use super::MethodRepo;

/// Method repository backed by a SQLite connection pool.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Clone)]
pub struct SqliteMethodRepo {
    pool: SqlitePool,
}

impl SqliteMethodRepo {
    /// Creates a repository on top of `pool`.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteMethodRepo { pool }
    }

    /// Inserts `items` in chunks of `chunk_size`, all inside a single transaction.
    ///
    /// Either every record is committed or none is. The chunk size is validated
    /// before anything is written.
    pub async fn add_chunked(
        &self,
        items: &[Method],
        chunk_size: i64,
    ) -> Result<Vec<Method>, DatabaseError> {
        let chunks = chunk_slice(items, chunk_size)?;

        let mut tx = self.pool.begin().await.map_err(DatabaseError::SqlError)?;
        let mut committed = Vec::with_capacity(items.len());
        for (index, chunk) in chunks.iter().enumerate() {
            let rows = insert_rows(&mut *tx, chunk).await.map_err(|e| {
                log::error!(
                    "Failed to insert chunk {} of {} ({} records): {}",
                    index + 1,
                    chunks.len(),
                    chunk.len(),
                    e
                );
                e
            })?;
            committed.extend(rows);
        }
        tx.commit().await.map_err(DatabaseError::SqlError)?;

        log::debug!(
            "Inserted {} records in {} chunk(s)",
            committed.len(),
            chunks.len()
        );
        Ok(committed)
    }

    /// Replaces the value of method `id`.
    pub async fn update(&self, id: i64, value: &str) -> Result<(), DatabaseError> {
        let result = sqlx::query("UPDATE methods SET value = ? WHERE id = ?")
            .bind(value)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::SqlError)?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NoRowsAffected(id));
        }
        Ok(())
    }

    /// Deletes method `id`.
    pub async fn remove(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM methods WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::SqlError)?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NoRowsAffected(id));
        }
        Ok(())
    }

    /// Returns up to `limit` methods ordered by id, skipping the first `offset`.
    pub async fn list(&self, limit: u32, offset: u32) -> Result<Vec<Method>, DatabaseError> {
        let rows = sqlx::query(
            "SELECT id, user_id, value, created_at FROM methods ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::SqlError)?;

        rows.iter().map(method_from_row).collect()
    }

    /// Fetches method `id`.
    pub async fn describe(&self, id: i64) -> Result<Method, DatabaseError> {
        let row = sqlx::query("SELECT id, user_id, value, created_at FROM methods WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DatabaseError::SqlError)?;

        match row {
            Some(row) => method_from_row(&row),
            None => Err(DatabaseError::NotFound(id)),
        }
    }
}

impl MethodRepo for SqliteMethodRepo {
    async fn add(&self, items: &[Method]) -> Result<Vec<Method>, DatabaseError> {
        let mut tx = self.pool.begin().await.map_err(DatabaseError::SqlError)?;
        let committed = insert_rows(&mut *tx, items).await?;
        tx.commit().await.map_err(DatabaseError::SqlError)?;
        Ok(committed)
    }
}

/// Inserts `items` on `conn`, returning them with their assigned id and timestamp.
async fn insert_rows(
    conn: &mut SqliteConnection,
    items: &[Method],
) -> Result<Vec<Method>, DatabaseError> {
    let mut committed = Vec::with_capacity(items.len());
    for item in items {
        let user_id = i64::try_from(item.user_id).map_err(|_| {
            DatabaseError::ValueOutOfRange(format!("user_id {} exceeds i64", item.user_id))
        })?;
        let created_at = chrono::Utc::now().timestamp_millis();

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO methods (user_id, value, created_at) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(user_id)
        .bind(&item.value)
        .bind(created_at)
        .fetch_one(&mut *conn)
        .await
        .map_err(DatabaseError::SqlError)?;

        committed.push(Method {
            id,
            user_id: item.user_id,
            value: item.value.clone(),
            created_at,
        });
    }
    Ok(committed)
}

fn method_from_row(row: &SqliteRow) -> Result<Method, DatabaseError> {
    let user_id: i64 = row.try_get("user_id")?;
    Ok(Method {
        id: row.try_get("id")?,
        user_id: u64::try_from(user_id)
            .map_err(|_| DatabaseError::ValueOutOfRange(format!("user_id {user_id}")))?,
        value: row.try_get("value")?,
        created_at: row.try_get("created_at")?,
    })
}
