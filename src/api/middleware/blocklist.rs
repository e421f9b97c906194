//! Client blocklist middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::{error::AppError, state::AppState, utils::client_addr::ClientAddr};

/// Refuses requests from blocklisted client addresses.
///
/// The client IP is resolved the same way as for redirect history
/// (forwarding headers only when `behind_proxy` is set). Requests whose
/// address cannot be resolved are let through.
///
/// # Errors
///
/// Returns `403 Forbidden` with message `Access denied` when the client IP
/// matches any configured address or network.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/{url_id}", get(redirect_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), blocklist::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if st.blocklist.is_empty() {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();
    let client = ClientAddr::from_parts(&mut parts, st.behind_proxy).await;
    let req = Request::from_parts(parts, body);

    if let Some(client) = client
        && st.is_blocked(client.ip)
    {
        tracing::info!("Blocked request from {}", client.ip);
        return Err(AppError::forbidden(
            "Access denied",
            json!({ "client": client.ip.to_string() }),
        ));
    }

    Ok(next.run(req).await)
}
