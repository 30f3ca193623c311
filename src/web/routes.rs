//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{listing_page_handler, organization_page_handler};
use axum::{Router, routing::get};

/// Public HTML pages.
///
/// # Endpoints
///
/// - `GET /dogs/{slug}` - Listing page head
/// - `GET /organizations/{slug}` - Organization page head
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/dogs/{slug}", get(listing_page_handler))
        .route("/organizations/{slug}", get(organization_page_handler))
}
