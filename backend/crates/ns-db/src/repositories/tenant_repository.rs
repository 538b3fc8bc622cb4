use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use ns_core::Tenant;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct TenantRepository {
    pool: SqlitePool,
}

impl TenantRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the tenant unless one with the same `tenant_id` exists.
    /// Existing rows are left untouched. Returns whether a row was created.
    pub async fn upsert(&self, tenant: &Tenant) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              INSERT INTO tenants (id, tenant_id, domain, display_name, created_at)
              VALUES (?, ?, ?, ?, ?)
              ON CONFLICT(tenant_id) DO NOTHING
              "#,
        )
        .bind(tenant.id.to_string())
        .bind(&tenant.tenant_id)
        .bind(&tenant.domain)
        .bind(&tenant.display_name)
        .bind(tenant.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_tenant_id(&self, tenant_id: &str) -> DbErrorResult<Option<Tenant>> {
        let row = sqlx::query(
            r#"
              SELECT id, tenant_id, domain, display_name, created_at
              FROM tenants
              WHERE tenant_id = ?
              "#,
        )
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tenants")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<Tenant> {
        Ok(Tenant {
            id: parse_uuid(row.try_get("id")?, "tenants", "id")?,
            tenant_id: row.try_get("tenant_id")?,
            domain: row.try_get("domain")?,
            display_name: row.try_get("display_name")?,
            created_at: parse_timestamp(row.try_get("created_at")?, "tenants", "created_at")?,
        })
    }
}
