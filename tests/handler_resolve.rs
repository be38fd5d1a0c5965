mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use url_mapper::api::handlers::resolve_handler;

fn resolve_app(pool: PgPool) -> Router {
    Router::new()
        .route("/api/resolve", post(resolve_handler))
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_resolve_existing_hash(pool: PgPool) {
    common::insert_test_mapping(&pool, "Ab3xY9kQz1", "https://example.com/a").await;

    let server = TestServer::new(resolve_app(pool)).unwrap();

    let response = server
        .post("/api/resolve")
        .json(&json!({ "hash": "Ab3xY9kQz1" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["hash"], "Ab3xY9kQz1");
}

#[sqlx::test]
async fn test_resolve_unknown_hash_is_null(pool: PgPool) {
    let server = TestServer::new(resolve_app(pool)).unwrap();

    let response = server
        .post("/api/resolve")
        .json(&json!({ "hash": "doesnotexist" }))
        .await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>()["hash"].is_null());
}

#[sqlx::test]
async fn test_resolve_rejects_empty_hash(pool: PgPool) {
    let server = TestServer::new(resolve_app(pool)).unwrap();

    let response = server.post("/api/resolve").json(&json!({ "hash": "" })).await;

    response.assert_status_bad_request();
}
