//! Handlers for explicit cache invalidation.
//!
//! Mounted behind [`crate::api::middleware::auth`]; every request needs
//! `Authorization: Bearer <ADMIN_TOKEN>`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use tracing::info;

use crate::error::AppError;
use crate::infrastructure::cache::CacheError;
use crate::state::AppState;
use crate::utils::slug::is_valid_slug;

fn checked_slug(slug: &str) -> Result<(), AppError> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "Invalid slug",
            json!({ "slug": slug }),
        ))
    }
}

fn cache_failure(e: CacheError) -> AppError {
    AppError::internal("Cache invalidation failed", json!({ "reason": e.to_string() }))
}

/// Drops the cached record for one listing.
///
/// # Endpoint
///
/// `DELETE /api/cache/dogs/{slug}`
///
/// # Response
///
/// - **204 No Content**, also when nothing was cached
/// - **400 Bad Request**: malformed slug
/// - **401 Unauthorized**: missing or wrong token
pub async fn invalidate_listing_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, AppError> {
    checked_slug(&slug)?;
    state
        .entity_cache
        .invalidate_listing(&slug)
        .await
        .map_err(cache_failure)?;
    info!("Invalidated cached listing {}", slug);
    Ok(StatusCode::NO_CONTENT)
}

/// Drops the cached record for one organization.
///
/// # Endpoint
///
/// `DELETE /api/cache/organizations/{slug}`
pub async fn invalidate_organization_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, AppError> {
    checked_slug(&slug)?;
    state
        .entity_cache
        .invalidate_organization(&slug)
        .await
        .map_err(cache_failure)?;
    info!("Invalidated cached organization {}", slug);
    Ok(StatusCode::NO_CONTENT)
}

/// Drops every cached record.
///
/// # Endpoint
///
/// `DELETE /api/cache`
pub async fn flush_cache_handler(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let removed = state
        .entity_cache
        .invalidate_all()
        .await
        .map_err(cache_failure)?;
    info!(
        "Flushed entity cache ({}): {} keys removed",
        state.entity_cache.backend_name(),
        removed
    );
    Ok(StatusCode::NO_CONTENT)
}
