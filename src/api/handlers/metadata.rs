//! Handlers returning page metadata as JSON.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::application::services::PageMetadata;
use crate::state::AppState;

/// Resolves metadata and JSON-LD for a dog listing page.
///
/// # Endpoint
///
/// `GET /api/meta/dogs/{slug}`
///
/// # Response
///
/// Always **200 OK**. `found` is `false` when the listing does not exist or
/// could not be loaded; `metadata` is then the Not-Found record.
pub async fn listing_metadata_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<PageMetadata> {
    Json(state.page_service.listing_page(&slug).await)
}

/// Resolves metadata and JSON-LD for an organization page.
///
/// # Endpoint
///
/// `GET /api/meta/organizations/{slug}`
pub async fn organization_metadata_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<PageMetadata> {
    Json(state.page_service.organization_page(&slug).await)
}
