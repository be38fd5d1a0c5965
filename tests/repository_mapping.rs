mod common;

use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use url_mapper::domain::entities::NewMapping;
use url_mapper::domain::repositories::MappingRepository;
use url_mapper::infrastructure::persistence::PgMappingRepository;

fn new_mapping(hash: &str, url: &str) -> NewMapping {
    NewMapping {
        short_hash: hash.to_string(),
        original_url: url.to_string(),
        registered_at: Utc::now(),
    }
}

#[sqlx::test]
async fn test_try_insert_and_find_by_hash(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let inserted = repo
        .try_insert(new_mapping("Ab3xY9kQz1", "https://example.com/a"))
        .await
        .unwrap()
        .expect("insert should succeed on empty table");

    assert_eq!(inserted.short_hash, "Ab3xY9kQz1");

    let found = repo.find_by_hash("Ab3xY9kQz1").await.unwrap().unwrap();
    assert_eq!(found.original_url, "https://example.com/a");
    assert_eq!(found.registered_at, inserted.registered_at);
}

#[sqlx::test]
async fn test_find_by_hash_miss(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let found = repo.find_by_hash("doesnotexist").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn test_find_by_original_url(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    repo.try_insert(new_mapping("Ab3xY9kQz1", "https://example.com/a"))
        .await
        .unwrap();

    let found = repo
        .find_by_original_url("https://example.com/a")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.short_hash, "Ab3xY9kQz1");

    let missing = repo
        .find_by_original_url("https://example.com/other")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_try_insert_conflict_on_original_url(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    repo.try_insert(new_mapping("Ab3xY9kQz1", "https://example.com/a"))
        .await
        .unwrap();

    // Same URL under a different hash must not create a second record.
    let result = repo
        .try_insert(new_mapping("Qw8rT2nMx0", "https://example.com/a"))
        .await
        .unwrap();
    assert!(result.is_none());

    let kept = repo
        .find_by_original_url("https://example.com/a")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(kept.short_hash, "Ab3xY9kQz1");
}

#[sqlx::test]
async fn test_try_insert_conflict_on_hash_does_not_overwrite(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    repo.try_insert(new_mapping("Ab3xY9kQz1", "https://example.com/a"))
        .await
        .unwrap();

    // A colliding hash for a different URL must leave the original intact.
    let result = repo
        .try_insert(new_mapping("Ab3xY9kQz1", "https://example.com/b"))
        .await
        .unwrap();
    assert!(result.is_none());

    let kept = repo.find_by_hash("Ab3xY9kQz1").await.unwrap().unwrap();
    assert_eq!(kept.original_url, "https://example.com/a");
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));
    assert!(repo.ping().await.is_ok());
}
