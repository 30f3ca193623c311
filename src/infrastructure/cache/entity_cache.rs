//! Typed JSON cache for listing and organization records.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::{ListingRecord, OrganizationRecord};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::warn;

const LISTING_PREFIX: &str = "listing:";
const ORGANIZATION_PREFIX: &str = "organization:";

/// Entity-level view over a [`CacheService`].
///
/// Records are stored as JSON under `listing:{slug}` and
/// `organization:{slug}`. Undecodable payloads are treated as misses and
/// evicted.
#[derive(Clone)]
pub struct EntityCache {
    backend: Arc<dyn CacheService>,
}

impl EntityCache {
    pub fn new(backend: Arc<dyn CacheService>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    pub async fn health_check(&self) -> bool {
        self.backend.health_check().await
    }

    pub async fn get_listing(&self, slug: &str) -> Option<ListingRecord> {
        self.get_json(&listing_key(slug)).await
    }

    pub async fn put_listing(&self, listing: &ListingRecord) {
        self.put_json(&listing_key(&listing.slug), listing).await
    }

    pub async fn get_organization(&self, slug: &str) -> Option<OrganizationRecord> {
        self.get_json(&organization_key(slug)).await
    }

    pub async fn put_organization(&self, org: &OrganizationRecord) {
        self.put_json(&organization_key(&org.slug), org).await
    }

    /// Drops the cached record for one listing.
    pub async fn invalidate_listing(&self, slug: &str) -> CacheResult<()> {
        self.backend.invalidate(&listing_key(slug)).await
    }

    /// Drops the cached record for one organization.
    pub async fn invalidate_organization(&self, slug: &str) -> CacheResult<()> {
        self.backend.invalidate(&organization_key(slug)).await
    }

    /// Drops every cached listing and organization.
    pub async fn invalidate_all(&self) -> CacheResult<u64> {
        let listings = self.backend.invalidate_prefix(LISTING_PREFIX).await?;
        let organizations = self.backend.invalidate_prefix(ORGANIZATION_PREFIX).await?;
        Ok(listings + organizations)
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Cache read failed for {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(
                    "{}",
                    CacheError::SerializationError(format!("{}: {}", key, e))
                );
                let _ = self.backend.invalidate(key).await;
                None
            }
        }
    }

    async fn put_json<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "{}",
                    CacheError::SerializationError(format!("{}: {}", key, e))
                );
                return;
            }
        };

        if let Err(e) = self.backend.set(key, &raw, None).await {
            warn!("Cache write failed for {}: {}", key, e);
        }
    }
}

fn listing_key(slug: &str) -> String {
    format!("{LISTING_PREFIX}{slug}")
}

fn organization_key(slug: &str) -> String {
    format!("{ORGANIZATION_PREFIX}{slug}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::{MemoryCache, NullCache};

    fn organization(slug: &str) -> OrganizationRecord {
        OrganizationRecord {
            id: 7,
            name: "Paws Rescue".to_string(),
            slug: slug.to_string(),
            description: None,
            city: Some("Berlin".to_string()),
            country: Some("Germany".to_string()),
            website_url: None,
            logo_url: None,
            founding_year: Some(2012),
            dog_count: Some(3),
            adoption_fee: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_organization_roundtrip_and_invalidate() {
        let cache = EntityCache::new(Arc::new(MemoryCache::new(60)));
        let org = organization("paws-rescue");

        cache.put_organization(&org).await;
        assert_eq!(cache.get_organization("paws-rescue").await, Some(org));

        cache.invalidate_organization("paws-rescue").await.unwrap();
        assert!(cache.get_organization("paws-rescue").await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_payload_is_a_miss() {
        let backend = Arc::new(MemoryCache::new(60));
        backend
            .set("organization:broken", "not json", None)
            .await
            .unwrap();
        let cache = EntityCache::new(backend.clone());

        assert!(cache.get_organization("broken").await.is_none());
        assert!(backend.get("organization:broken").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let cache = EntityCache::new(Arc::new(MemoryCache::new(60)));
        cache.put_organization(&organization("a")).await;
        cache.put_organization(&organization("b")).await;

        assert_eq!(cache.invalidate_all().await.unwrap(), 2);
        assert!(cache.get_organization("a").await.is_none());
    }

    #[tokio::test]
    async fn test_null_backend_never_hits() {
        let cache = EntityCache::new(Arc::new(NullCache::new()));
        cache.put_organization(&organization("a")).await;

        assert!(cache.get_organization("a").await.is_none());
        assert_eq!(cache.backend_name(), "none");
    }
}
