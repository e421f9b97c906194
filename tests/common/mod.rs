#![allow(dead_code)]

use axum::Router;
use axum::extract::connect_info::MockConnectInfo;
use axum_test::TestServer;
use short_url_service::prelude::{AppState, PgShortUrlRepository, ShortUrlService};
use short_url_service::routes::router;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use uuid::Uuid;

pub const BASE_URL: &str = "http://localhost:8000/api/v1";
pub const CLIENT: &str = "127.0.0.1:12345";

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgShortUrlRepository::new(Arc::new(pool)));
    AppState::new(Arc::new(ShortUrlService::new(repository, BASE_URL)))
}

/// Full application router with a fixed peer address.
pub fn test_app(state: AppState) -> Router {
    let addr: SocketAddr = CLIENT.parse().unwrap();
    router(state).layer(MockConnectInfo(addr))
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(test_app(state)).unwrap()
}

pub async fn create_test_url(pool: &PgPool, url_id: &str, original_url: &str) -> Uuid {
    let id = Uuid::new_v4();

    sqlx::query(
        "INSERT INTO short_url (id, original_url, url_id, short_url) VALUES ($1, $2, $3, $4)",
    )
    .bind(id)
    .bind(original_url)
    .bind(url_id)
    .bind(format!("{BASE_URL}/{url_id}"))
    .execute(pool)
    .await
    .unwrap();

    id
}

pub async fn create_test_usage(pool: &PgPool, short_url: Uuid, client: &str) {
    sqlx::query("INSERT INTO short_url_history (id, short_url, client) VALUES ($1, $2, $3)")
        .bind(Uuid::new_v4())
        .bind(short_url)
        .bind(client)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn usages_count(pool: &PgPool, url_id: &str) -> i64 {
    sqlx::query_scalar("SELECT usages_count FROM short_url WHERE url_id = $1")
        .bind(url_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn history_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM short_url_history")
        .fetch_one(pool)
        .await
        .unwrap()
}
