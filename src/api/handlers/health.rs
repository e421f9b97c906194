//! Handlers for service liveness and API version.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{API_VERSION, PingResponse, VersionResponse};
use crate::state::AppState;

/// Reports database connectivity.
///
/// # Endpoint
///
/// `GET /api/v1/ping`
///
/// # Response Codes
///
/// - **200 OK**: `{"connection_db": true}`
/// - **503 Service Unavailable**: `{"connection_db": false}`
pub async fn ping_handler(State(state): State<AppState>) -> (StatusCode, Json<PingResponse>) {
    let connection_db = state.url_service.ping().await;

    let status = if connection_db {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(PingResponse { connection_db }))
}

/// `GET /api/v1/` - API version.
pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: API_VERSION,
    })
}
