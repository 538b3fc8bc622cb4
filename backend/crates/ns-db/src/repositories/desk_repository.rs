use crate::repositories::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use ns_core::{Desk, DeskStatus};

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct DeskRepository {
    pool: SqlitePool,
}

impl DeskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert desks in one transaction, skipping codes that already exist.
    /// Returns the number of rows created.
    pub async fn create_many(&self, desks: &[Desk]) -> DbErrorResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for desk in desks {
            let result = sqlx::query(
                r#"
                  INSERT INTO desks (id, desk_code, status, map_x, map_y, qr_code_value, created_at)
                  VALUES (?, ?, ?, ?, ?, ?, ?)
                  ON CONFLICT(desk_code) DO NOTHING
                  "#,
            )
            .bind(desk.id.to_string())
            .bind(&desk.desk_code)
            .bind(desk.status.as_str())
            .bind(desk.map_x)
            .bind(desk.map_y)
            .bind(&desk.qr_code_value)
            .bind(desk.created_at.timestamp())
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    pub async fn find_by_code(&self, desk_code: &str) -> DbErrorResult<Option<Desk>> {
        let row = sqlx::query(
            r#"
              SELECT id, desk_code, status, map_x, map_y, qr_code_value, created_at
              FROM desks
              WHERE desk_code = ?
              "#,
        )
        .bind(desk_code)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    pub async fn list(&self) -> DbErrorResult<Vec<Desk>> {
        let rows = sqlx::query(
            r#"
              SELECT id, desk_code, status, map_x, map_y, qr_code_value, created_at
              FROM desks
              ORDER BY desk_code
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM desks")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<Desk> {
        let status: String = row.try_get("status")?;

        Ok(Desk {
            id: parse_uuid(row.try_get("id")?, "desks", "id")?,
            desk_code: row.try_get("desk_code")?,
            status: DeskStatus::from_str(&status)
                .map_err(|e| DbError::corrupt_row("desks", "status", e.to_string()))?,
            map_x: row.try_get("map_x")?,
            map_y: row.try_get("map_y")?,
            qr_code_value: row.try_get("qr_code_value")?,
            created_at: parse_timestamp(row.try_get("created_at")?, "desks", "created_at")?,
        })
    }
}
