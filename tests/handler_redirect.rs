mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::PgPool;
use url_mapper::api::handlers::redirect_handler;

fn redirect_app(pool: PgPool) -> Router {
    Router::new()
        .route("/{hash}", get(redirect_handler))
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_redirect_to_original_url(pool: PgPool) {
    common::insert_test_mapping(&pool, "Ab3xY9kQz1", "https://example.com/a").await;

    let server = TestServer::new(redirect_app(pool)).unwrap();

    let response = server.get("/Ab3xY9kQz1").await;

    response.assert_status(axum::http::StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.com/a"
    );
}

#[sqlx::test]
async fn test_redirect_unknown_hash_returns_404(pool: PgPool) {
    let server = TestServer::new(redirect_app(pool)).unwrap();

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_redirect_returns_url_verbatim(pool: PgPool) {
    // The stored URL must come back exactly as shortened, query string and all.
    let url = "https://example.com/path?q=1&lang=en";
    common::insert_test_mapping(&pool, "Qw8rT2nMx0", url).await;

    let server = TestServer::new(redirect_app(pool)).unwrap();

    let response = server.get("/Qw8rT2nMx0").await;

    response.assert_status(axum::http::StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location").to_str().unwrap(), url);
}
