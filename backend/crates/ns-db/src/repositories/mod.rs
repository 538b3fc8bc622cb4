pub mod admin_repository;
pub mod desk_repository;
pub mod tenant_repository;

use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Ids are stored as hyphenated TEXT
#[track_caller]
pub(crate) fn parse_uuid(value: &str, table: &'static str, column: &'static str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::corrupt_row(table, column, e.to_string()))
}

/// Timestamps are stored as unix seconds
#[track_caller]
pub(crate) fn parse_timestamp(
    value: i64,
    table: &'static str,
    column: &'static str,
) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0)
        .ok_or_else(|| DbError::corrupt_row(table, column, format!("{value} is out of range")))
}
