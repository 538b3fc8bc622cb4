use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use ns_auth::{AdminStore, AuthError, Result as AuthErrorResult};
use ns_core::AdminRecord;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct AdminRepository {
    pool: SqlitePool,
}

impl AdminRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the admin unless the email is already registered.
    /// Returns whether a row was created.
    pub async fn upsert(&self, admin: &AdminRecord) -> DbErrorResult<bool> {
        let email = admin.email.to_lowercase();

        let result = sqlx::query(
            r#"
              INSERT INTO admins (id, email, display_name, added_by, created_at)
              VALUES (?, ?, ?, ?, ?)
              ON CONFLICT(email) DO NOTHING
              "#,
        )
        .bind(admin.id.to_string())
        .bind(&email)
        .bind(&admin.display_name)
        .bind(&admin.added_by)
        .bind(admin.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<AdminRecord>> {
        let row = sqlx::query(
            r#"
              SELECT id, email, display_name, added_by, created_at
              FROM admins
              WHERE email = ?
              "#,
        )
        .bind(email.to_lowercase())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    pub async fn list(&self) -> DbErrorResult<Vec<AdminRecord>> {
        let rows = sqlx::query(
            r#"
              SELECT id, email, display_name, added_by, created_at
              FROM admins
              ORDER BY email
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    pub async fn delete_by_email(&self, email: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM admins WHERE email = ?")
            .bind(email.to_lowercase())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<AdminRecord> {
        Ok(AdminRecord {
            id: parse_uuid(row.try_get("id")?, "admins", "id")?,
            email: row.try_get("email")?,
            display_name: row.try_get("display_name")?,
            added_by: row.try_get("added_by")?,
            created_at: parse_timestamp(row.try_get("created_at")?, "admins", "created_at")?,
        })
    }
}

#[async_trait]
impl AdminStore for AdminRepository {
    async fn find_by_email(&self, email: &str) -> AuthErrorResult<Option<AdminRecord>> {
        AdminRepository::find_by_email(self, email)
            .await
            .map_err(|e| AuthError::admin_lookup(email, e))
    }
}
