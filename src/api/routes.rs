//! API route configuration.
//!
//! Mounted under `/api/v1` by [`crate::routes::app_router`].

use crate::api::handlers::{
    bulk_shorten_handler, create_short_url_handler, ping_handler, redirect_handler,
    status_handler, version_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /`                 - API version
/// - `POST /`                 - Create a short URL
/// - `GET  /ping`             - Database connectivity
/// - `POST /shorten`          - Create short URLs in bulk
/// - `GET  /{url_id}`         - Redirect to the original URL
/// - `GET  /{url_id}/status`  - Usage counter or redirect history
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(version_handler).post(create_short_url_handler))
        .route("/ping", get(ping_handler))
        .route("/shorten", post(bulk_shorten_handler))
        .route("/{url_id}", get(redirect_handler))
        .route("/{url_id}/status", get(status_handler))
}
