use crate::{SeedError, logger, run};

use ns_config::LogLevel;
use ns_db::{SEED_DESKS, SeedOptions, SeedReport};

use googletest::prelude::*;
use tempfile::TempDir;

fn options() -> SeedOptions {
    SeedOptions {
        tenant_id: String::from("tenant-abc"),
        admin_email: String::from("Admin@Contoso.com"),
    }
}

#[tokio::test]
async fn given_fresh_directory_when_run_then_everything_created() {
    // Given
    let temp = TempDir::new().unwrap();
    let database_path = temp.path().join("data").join("nileseat.db");

    // When
    let report = run(&database_path, options()).await.unwrap();

    // Then
    assert_that!(
        report,
        eq(SeedReport {
            tenant_created: true,
            admin_created: true,
            desks_created: SEED_DESKS.len() as u64,
        })
    );
    assert_that!(database_path.exists(), eq(true));
}

#[tokio::test]
async fn given_seeded_database_when_run_again_then_noop() {
    // Given
    let temp = TempDir::new().unwrap();
    let database_path = temp.path().join("nileseat.db");
    run(&database_path, options()).await.unwrap();

    // When
    let report = run(&database_path, options()).await.unwrap();

    // Then
    assert_that!(report.is_noop(), eq(true));
}

#[tokio::test]
async fn given_seed_step_failure_when_run_then_error_returned_and_pool_closed() {
    // Given
    let temp = TempDir::new().unwrap();
    let database_path = temp.path().join("nileseat.db");
    let pool = ns_db::create_pool(&database_path).await.unwrap();
    sqlx::query("DROP TABLE desks").execute(&pool).await.unwrap();
    pool.close().await;

    // When
    let result = run(&database_path, options()).await;

    // Then
    assert!(matches!(result, Err(SeedError::Db(_))));
    // The WAL file is removed once the last connection closes
    assert_that!(temp.path().join("nileseat.db-wal").exists(), eq(false));
}

#[tokio::test]
async fn given_file_logger_when_run_fails_then_error_written_to_log() {
    // Given
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("log").join("seed.log");
    logger::initialize(LogLevel::default(), Some(log_path.clone()), false).unwrap();
    let blocker = temp.path().join("not-a-directory");
    std::fs::write(&blocker, "").unwrap();
    let database_path = blocker.join("nileseat.db");

    // When
    let result = run(&database_path, options()).await;

    // Then
    assert_that!(result, err(anything()));
    log::logger().flush();
    let logged = std::fs::read_to_string(&log_path).unwrap();
    assert_that!(logged, contains_substring("ERROR"));
    assert_that!(
        logged,
        contains_substring(format!("Seed failed opening {}", database_path.display()))
    );
}
