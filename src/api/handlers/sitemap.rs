//! Handlers for the sitemap document and entry validation.

use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::api::dto::sitemap::ValidateEntryResponse;
use crate::application::sitemap_entry::format_entry;
use crate::domain::entities::RawSitemapEntry;
use crate::error::AppError;
use crate::state::AppState;

/// Serves the sitemap.
///
/// # Endpoint
///
/// `GET /sitemap.xml`
///
/// # Response
///
/// Always **200 OK** with `application/xml`. When the data source is down
/// the document still lists the static pages.
pub async fn sitemap_handler(State(state): State<AppState>) -> impl IntoResponse {
    let xml = state.sitemap_service.generate().await;

    (
        [
            (header::CONTENT_TYPE, "application/xml; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        xml,
    )
}

/// Validates and normalizes one sitemap entry.
///
/// # Endpoint
///
/// `POST /api/sitemap/validate`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://www.rescuedogs.me/dogs/rex",
///   "lastmod": "2025-07-14T08:58:28.426257",
///   "changefreq": "daily",
///   "priority": 0.8
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with a `validation_error` body naming the
/// offending field.
pub async fn validate_entry_handler(
    Json(raw): Json<RawSitemapEntry>,
) -> Result<Json<ValidateEntryResponse>, AppError> {
    let entry = format_entry(&raw)?;
    Ok(Json(ValidateEntryResponse { valid: true, entry }))
}
