#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use url_mapper::infrastructure::cache::NullCache;
use url_mapper::state::AppState;

pub async fn insert_test_mapping(pool: &PgPool, hash: &str, url: &str) {
    sqlx::query("INSERT INTO mappings (short_hash, original_url) VALUES ($1, $2)")
        .bind(hash)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), Arc::new(NullCache))
}
