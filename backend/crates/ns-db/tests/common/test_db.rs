use ns_db::run_migrations;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Fresh in-memory database with the NileSeat schema applied
pub async fn create_test_pool() -> SqlitePool {
    // A second connection would see a different :memory: database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            "sqlite::memory:"
                .parse::<SqliteConnectOptions>()
                .expect("in-memory URL should parse")
                .foreign_keys(true),
        )
        .await
        .expect("in-memory SQLite should open");

    run_migrations(&pool)
        .await
        .expect("migrations should apply to an empty database");

    pool
}
