//! Integration tests for `PgFestivalRepository`.

use chrono::NaiveDate;
use festival_core::entity::Entity;
use festival_core::error::DomainError;
use festival_core::repository::EntityRepository;
use festival_forms::domain::record::{FestivalId, FestivalRecord, UserId};
use festival_forms::domain::requests::{FestivalCreateRequest, FestivalUpdateRequest};
use festival_store::pg_festival_repository::PgFestivalRepository;
use sqlx::PgPool;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Helper to build an unsaved record with sensible defaults.
fn make_record(name: &str, creator: i64) -> FestivalRecord {
    let request = FestivalCreateRequest {
        festival_name: name.to_owned(),
        start_date: date(2024, 5, 1),
        end_date: date(2024, 5, 3),
        description: Some("d".to_owned()),
        address: Some("a".to_owned()),
        fee: "free".to_owned(),
    };
    FestivalRecord::create(&request, UserId::new(creator), "http://x/img.png")
}

// --- create ---

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_assigns_identifier_and_round_trips(pool: PgPool) {
    let repo = PgFestivalRepository::new(pool);

    let stored = repo.create(make_record("Spring Fest", 7)).await.unwrap();
    let id = stored.id().expect("identifier assigned");

    let loaded = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(loaded, stored);
    assert_eq!(loaded.user_id(), UserId::new(7));
    assert_eq!(loaded.image(), "http://x/img.png");
    assert_eq!(loaded.start_date(), date(2024, 5, 1));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_rejects_record_that_already_has_identifier(pool: PgPool) {
    let repo = PgFestivalRepository::new(pool);
    let mut record = make_record("Spring Fest", 7);
    record.assign_id(FestivalId::new(100)).unwrap();

    let result = repo.create(record).await;

    assert!(matches!(
        result,
        Err(DomainError::IdentityAlreadyAssigned { .. })
    ));
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_stores_missing_optional_fields_as_null(pool: PgPool) {
    let repo = PgFestivalRepository::new(pool);
    let request = FestivalCreateRequest {
        festival_name: "Quiet Fest".to_owned(),
        start_date: date(2024, 6, 1),
        end_date: date(2024, 6, 1),
        description: None,
        address: None,
        fee: "5".to_owned(),
    };
    let record = FestivalRecord::create(&request, UserId::new(3), "img");

    let stored = repo.create(record).await.unwrap();

    let loaded = repo.find_by_id(stored.id().unwrap()).await.unwrap().unwrap();
    assert_eq!(loaded.description(), None);
    assert_eq!(loaded.address(), None);
}

// --- update ---

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_replaces_fields_but_keeps_owner(pool: PgPool) {
    let repo = PgFestivalRepository::new(pool);
    let mut record = repo.create(make_record("Spring Fest", 7)).await.unwrap();

    record.update(&FestivalUpdateRequest {
        festival_name: "Spring Fest 2".to_owned(),
        start_date: date(2024, 5, 2),
        end_date: date(2024, 5, 4),
        description: None,
        address: Some("a2".to_owned()),
        image: "http://x/img2.png".to_owned(),
        fee: "10".to_owned(),
    });
    repo.update(&record).await.unwrap();

    let loaded = repo.find_by_id(record.id().unwrap()).await.unwrap().unwrap();
    assert_eq!(loaded, record);
    assert_eq!(loaded.festival_name(), "Spring Fest 2");
    assert_eq!(loaded.description(), None);
    assert_eq!(loaded.user_id(), UserId::new(7));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_missing_row_is_not_found(pool: PgPool) {
    let repo = PgFestivalRepository::new(pool);
    let mut record = make_record("Ghost Fest", 1);
    record.assign_id(FestivalId::new(999)).unwrap();

    let result = repo.update(&record).await;

    match result {
        Err(DomainError::NotFound { kind, id }) => {
            assert_eq!(kind, "festival");
            assert_eq!(id, "999");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_update_unsaved_record_is_rejected(pool: PgPool) {
    let repo = PgFestivalRepository::new(pool);

    let result = repo.update(&make_record("Unsaved", 1)).await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
}

// --- find ---

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_by_id_returns_none_for_unknown_id(pool: PgPool) {
    let repo = PgFestivalRepository::new(pool);

    let loaded = repo.find_by_id(FestivalId::new(12345)).await.unwrap();

    assert!(loaded.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_all_orders_by_identifier(pool: PgPool) {
    let repo = PgFestivalRepository::new(pool);
    for name in ["A", "B", "C"] {
        repo.create(make_record(name, 1)).await.unwrap();
    }

    let all = repo.find_all().await.unwrap();

    let names: Vec<&str> = all.iter().map(FestivalRecord::festival_name).collect();
    assert_eq!(names, ["A", "B", "C"]);
    assert!(all.windows(2).all(|w| w[0].id() < w[1].id()));
}

// --- delete ---

#[sqlx::test(migrations = "../../migrations")]
async fn test_delete_removes_row(pool: PgPool) {
    let repo = PgFestivalRepository::new(pool);
    let stored = repo.create(make_record("Short Fest", 1)).await.unwrap();
    let id = stored.id().unwrap();

    repo.delete(id).await.unwrap();

    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(matches!(
        repo.delete(id).await,
        Err(DomainError::NotFound { .. })
    ));
}
