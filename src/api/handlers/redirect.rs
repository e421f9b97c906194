//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_addr::ClientAddr;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/v1/{url_id}`
///
/// # Request Flow
///
/// 1. Resolve the client address (`ip:port`)
/// 2. Increment the usage counter and append a history entry in one transaction
/// 3. Return 307 Temporary Redirect
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(url_id): Path<String>,
    State(state): State<AppState>,
    client: ClientAddr,
) -> Result<Redirect, AppError> {
    let short_url = state
        .url_service
        .resolve(&url_id, &client.to_string())
        .await?;

    Ok(Redirect::temporary(&short_url.original_url))
}
