mod common;

use common::{create_test_desk, create_test_pool};

use ns_core::{Desk, DeskStatus};
use ns_db::DeskRepository;

use googletest::prelude::*;

#[tokio::test]
async fn given_new_desks_when_created_then_all_inserted() {
    // Given
    let pool = create_test_pool().await;
    let repo = DeskRepository::new(pool);
    let desks = vec![create_test_desk("A-1"), create_test_desk("A-2")];

    // When
    let inserted = repo.create_many(&desks).await.unwrap();

    // Then
    assert_that!(inserted, eq(2));
    assert_that!(repo.count().await.unwrap(), eq(2));
}

#[tokio::test]
async fn given_duplicate_codes_when_created_then_duplicates_skipped() {
    // Given
    let pool = create_test_pool().await;
    let repo = DeskRepository::new(pool);
    repo.create_many(&[create_test_desk("A-1")]).await.unwrap();

    // When
    let inserted = repo
        .create_many(&[
            Desk::new("A-1", DeskStatus::Unavailable, 0.9, 0.9),
            create_test_desk("A-2"),
        ])
        .await
        .unwrap();

    // Then
    assert_that!(inserted, eq(1));
    let existing = repo.find_by_code("A-1").await.unwrap().unwrap();
    assert_that!(existing.status, eq(DeskStatus::Available));
}

#[tokio::test]
async fn given_desk_when_found_by_code_then_fields_round_trip() {
    // Given
    let pool = create_test_pool().await;
    let repo = DeskRepository::new(pool);
    let desk = Desk::new("B-7", DeskStatus::Unavailable, 0.70, 0.25);
    repo.create_many(std::slice::from_ref(&desk)).await.unwrap();

    // When
    let found = repo.find_by_code("B-7").await.unwrap().unwrap();

    // Then
    assert_that!(found.id, eq(desk.id));
    assert_that!(found.status, eq(DeskStatus::Unavailable));
    assert_that!(found.map_x, eq(0.70));
    assert_that!(found.map_y, eq(0.25));
    assert_that!(found.qr_code_value.as_str(), eq("desk/B-7"));
}

#[tokio::test]
async fn given_empty_database_when_finding_unknown_code_then_returns_none() {
    let pool = create_test_pool().await;
    let repo = DeskRepository::new(pool);

    assert_that!(repo.find_by_code("Z-9").await.unwrap(), none());
    assert_that!(repo.list().await.unwrap().len(), eq(0));
}
