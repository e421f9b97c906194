mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    common::create_test_url(&pool, "abcd2345", "https://example.com/target").await;
    let server = common::test_server(common::create_test_state(pool.clone()));

    let response = server.get("/api/v1/abcd2345").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/target");
    assert_eq!(common::usages_count(&pool, "abcd2345").await, 1);
}

#[sqlx::test]
async fn test_redirect_records_client(pool: PgPool) {
    common::create_test_url(&pool, "abcd2345", "https://example.com").await;
    let server = common::test_server(common::create_test_state(pool.clone()));

    server.get("/api/v1/abcd2345").await;

    let client: String = sqlx::query_scalar("SELECT client FROM short_url_history")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(client, common::CLIENT);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool.clone()));

    let response = server.get("/api/v1/missingX").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["message"], "Url not found");
    assert_eq!(common::history_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_then_follow(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool.clone()));

    let created = server
        .post("/api/v1")
        .json(&json!({ "original_url": "https://example.com/round-trip" }))
        .await
        .json::<Value>();
    let url_id = created["url_id"].as_str().unwrap();

    for _ in 0..3 {
        let response = server.get(&format!("/api/v1/{url_id}")).await;
        assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    }

    assert_eq!(common::usages_count(&pool, url_id).await, 3);
}

#[sqlx::test]
async fn test_blocklisted_client_cannot_redirect(pool: PgPool) {
    common::create_test_url(&pool, "abcd2345", "https://example.com").await;
    let state = common::create_test_state(pool.clone())
        .with_blocklist(vec!["127.0.0.1/32".parse().unwrap()]);
    let server = common::test_server(state);

    let response = server.get("/api/v1/abcd2345").await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["error"]["message"], "Access denied");
    assert_eq!(common::usages_count(&pool, "abcd2345").await, 0);
}

#[sqlx::test]
async fn test_redirect_keeps_fragment(pool: PgPool) {
    let server = common::test_server(common::create_test_state(pool));

    let created = server
        .post("/api/v1")
        .json(&json!({ "original_url": "https://example.com/docs#anchor" }))
        .await
        .json::<Value>();
    let url_id = created["url_id"].as_str().unwrap();

    let response = server.get(&format!("/api/v1/{url_id}")).await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/docs#anchor");
}
