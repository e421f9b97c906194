//! Handlers for short URL creation.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::url::{BulkShortenRequest, ShortUrlResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /api/v1/`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "url_id": "Xk9mP2qR", "short_url": "http://localhost:8000/api/v1/Xk9mP2qR" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is not an absolute HTTP(S) URL.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortUrlResponse>), AppError> {
    payload.validate()?;

    let short_url = state.url_service.shorten(&payload.original_url).await?;

    Ok((StatusCode::CREATED, Json(short_url.into())))
}

/// Creates short URLs for a batch of URLs in one transaction.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// [
///   { "original_url": "https://example.com/a" },
///   { "original_url": "https://example.com/b" }
/// ]
/// ```
///
/// # Response
///
/// `201 Created` with one `{url_id, short_url}` object per input, in input order.
///
/// # Errors
///
/// Returns 400 Bad Request if the batch exceeds 1000 items or any URL is
/// invalid. Nothing is stored in that case.
pub async fn bulk_shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<BulkShortenRequest>,
) -> Result<(StatusCode, Json<Vec<ShortUrlResponse>>), AppError> {
    payload.validate()?;

    let created = state
        .url_service
        .shorten_many(&payload.original_urls())
        .await?;

    let items = created.into_iter().map(ShortUrlResponse::from).collect();

    Ok((StatusCode::CREATED, Json(items)))
}
