//! Read-through caching decorator for [`EntityRepository`].

use super::entity_cache::EntityCache;
use crate::domain::entities::{ListingRecord, OrganizationRecord};
use crate::domain::repositories::EntityRepository;
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

/// Consults the [`EntityCache`] before the wrapped repository for
/// single-entity lookups.
///
/// Bulk reads for the sitemap always go to the inner repository. Errors,
/// including not-found, are never cached.
pub struct CachedEntityRepository {
    inner: Arc<dyn EntityRepository>,
    cache: EntityCache,
}

impl CachedEntityRepository {
    pub fn new(inner: Arc<dyn EntityRepository>, cache: EntityCache) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl EntityRepository for CachedEntityRepository {
    async fn get_listing_by_slug(&self, slug: &str) -> Result<ListingRecord, AppError> {
        if let Some(listing) = self.cache.get_listing(slug).await {
            return Ok(listing);
        }
        let listing = self.inner.get_listing_by_slug(slug).await?;
        self.cache.put_listing(&listing).await;
        Ok(listing)
    }

    async fn get_all_listings(&self) -> Result<Vec<ListingRecord>, AppError> {
        self.inner.get_all_listings().await
    }

    async fn get_organization_by_slug(&self, slug: &str) -> Result<OrganizationRecord, AppError> {
        if let Some(org) = self.cache.get_organization(slug).await {
            return Ok(org);
        }
        let org = self.inner.get_organization_by_slug(slug).await?;
        self.cache.put_organization(&org).await;
        Ok(org)
    }

    async fn get_all_organizations(&self) -> Result<Vec<OrganizationRecord>, AppError> {
        self.inner.get_all_organizations().await
    }
}
