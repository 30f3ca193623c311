//! API route configuration.

use crate::api::handlers::{
    flush_cache_handler, invalidate_listing_handler, invalidate_organization_handler,
    listing_metadata_handler, organization_metadata_handler, validate_entry_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /meta/dogs/{slug}`           - Listing page metadata and JSON-LD
/// - `GET    /meta/organizations/{slug}`  - Organization page metadata and JSON-LD
/// - `POST   /sitemap/validate`           - Validate one sitemap entry
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/meta/dogs/{slug}", get(listing_metadata_handler))
        .route(
            "/meta/organizations/{slug}",
            get(organization_metadata_handler),
        )
        .route("/sitemap/validate", post(validate_entry_handler))
}

/// Cache-control routes, mounted under `/api` behind
/// [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `DELETE /cache/dogs/{slug}`          - Invalidate one cached listing
/// - `DELETE /cache/organizations/{slug}` - Invalidate one cached organization
/// - `DELETE /cache`                      - Invalidate all cached records
pub fn cache_routes() -> Router<AppState> {
    Router::new()
        .route("/cache", delete(flush_cache_handler))
        .route("/cache/dogs/{slug}", delete(invalidate_listing_handler))
        .route(
            "/cache/organizations/{slug}",
            delete(invalidate_organization_handler),
        )
}
