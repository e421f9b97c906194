//! Handler for short URL usage status.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::status::{HistoryItem, StatusParams, UsagesCountResponse};
use crate::application::services::UrlStatus;
use crate::error::AppError;
use crate::state::AppState;

/// Reports how often a short URL was used.
///
/// # Endpoint
///
/// `GET /api/v1/{url_id}/status`
///
/// # Query Parameters
///
/// - `full-info` (optional): list individual redirects instead of the counter
/// - `max-size` (optional): page size for `full-info` (default: 10, max: 1000)
/// - `offset` (optional): entries to skip for `full-info` (default: 0)
///
/// # Response
///
/// ```json
/// { "usages_count": 3 }
/// ```
///
/// or, with `full-info=true`, history oldest first:
///
/// ```json
/// [
///   {
///     "use_at": "2026-01-01T12:00:00Z",
///     "client": "127.0.0.1:53211",
///     "id": "6f0c...",
///     "short_url": "a1b2..."
///   }
/// ]
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 400 Bad Request if query parameters are out of range.
pub async fn status_handler(
    State(state): State<AppState>,
    Path(url_id): Path<String>,
    Query(params): Query<StatusParams>,
) -> Result<Response, AppError> {
    params.validate()?;

    let response = match state.url_service.status(&url_id, params.into()).await? {
        UrlStatus::Usages(usages_count) => {
            Json(UsagesCountResponse { usages_count }).into_response()
        }
        UrlStatus::History(history) => {
            let items: Vec<HistoryItem> = history.into_iter().map(HistoryItem::from).collect();
            Json(items).into_response()
        }
    };

    Ok(response)
}
