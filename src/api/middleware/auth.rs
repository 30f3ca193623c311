//! Bearer token authentication for cache control.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;
use tracing::warn;

use crate::{error::AppError, state::AppState};

/// Requires `Authorization: Bearer <ADMIN_TOKEN>`.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Bearer` if the header
/// is missing or malformed, the token does not match, or no token is
/// configured.
///
/// # Example
///
/// ```rust,ignore
/// let cache_control = api::routes::cache_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    if let Err(e) = st.auth_service.authenticate(&token) {
        warn!("Rejected cache-control request to {}", parts.uri.path());
        return Err(e);
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}
