//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/v1/*` - REST API, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Blocklist** - 403 for configured client addresses, applied to every path
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{blocklist, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

pub const API_PREFIX: &str = "/api/v1";

/// Builds the routes with state and middleware applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest(API_PREFIX, api::routes::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            blocklist::layer,
        ))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/api/v1/` reaches the
/// same handler as `/api/v1`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
