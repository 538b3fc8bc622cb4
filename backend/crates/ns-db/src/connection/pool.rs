use crate::{DbError, Result as DbErrorResult};

use ns_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

const MAX_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open (creating if missing) the SQLite database at `path` and migrate it.
#[track_caller]
pub fn create_pool(path: &Path) -> impl Future<Output = DbErrorResult<SqlitePool>> + Send + '_ {
    let caller = Location::caller();
    async move {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| DbError::Initialization {
                    path: parent.display().to_string(),
                    source,
                    location: ErrorLocation::from(caller),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;
        info!("Opened {} (WAL)", path.display());

        run_migrations(&pool).await?;

        Ok(pool)
    }
}

/// Apply the embedded schema migrations; already-applied ones are skipped.
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Schema up to date");
    Ok(())
}
