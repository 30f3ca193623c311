//! DTOs for sitemap entry validation.

use serde::Serialize;

use crate::domain::entities::SitemapEntry;

/// Response for `POST /api/sitemap/validate`.
#[derive(Debug, Serialize)]
pub struct ValidateEntryResponse {
    pub valid: bool,
    pub entry: SitemapEntry,
}
