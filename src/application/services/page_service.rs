//! Page metadata service for listing and organization pages.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::application::metadata::{
    PageKind, not_found_metadata, resolve_listing_metadata, resolve_organization_metadata,
};
use crate::application::structured_data::{listing_documents, organization_documents};
use crate::domain::entities::{MetadataRecord, SiteConfig, StructuredDataDocument};
use crate::domain::repositories::EntityRepository;
use crate::error::AppError;
use crate::utils::slug::is_valid_slug;

/// Everything a page head needs: metadata plus JSON-LD documents.
#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
    /// `false` when the Not-Found fallback was used.
    pub found: bool,
    pub metadata: MetadataRecord,
    pub structured_data: Vec<StructuredDataDocument>,
}

impl PageMetadata {
    fn not_found(kind: PageKind, site: &SiteConfig) -> Self {
        Self {
            found: false,
            metadata: not_found_metadata(kind, site),
            structured_data: Vec::new(),
        }
    }
}

/// Service resolving page metadata from the entity repository.
///
/// Lookups never fail: a missing entity, an invalid slug or any repository
/// error yields the minimal Not-Found record.
pub struct PageService {
    repository: Arc<dyn EntityRepository>,
    site: Arc<SiteConfig>,
}

impl PageService {
    /// Creates a new page service.
    pub fn new(repository: Arc<dyn EntityRepository>, site: Arc<SiteConfig>) -> Self {
        Self { repository, site }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Resolves metadata and structured data for a listing page.
    pub async fn listing_page(&self, slug: &str) -> PageMetadata {
        if !is_valid_slug(slug) {
            debug!("Rejecting invalid listing slug: {:?}", slug);
            return PageMetadata::not_found(PageKind::Listing, &self.site);
        }

        match self.repository.get_listing_by_slug(slug).await {
            Ok(listing) => PageMetadata {
                found: true,
                metadata: resolve_listing_metadata(&listing, &self.site),
                structured_data: listing_documents(&listing, &self.site),
            },
            Err(e) => {
                log_lookup_failure("listing", slug, &e);
                PageMetadata::not_found(PageKind::Listing, &self.site)
            }
        }
    }

    /// Resolves metadata and structured data for an organization page.
    pub async fn organization_page(&self, slug: &str) -> PageMetadata {
        if !is_valid_slug(slug) {
            debug!("Rejecting invalid organization slug: {:?}", slug);
            return PageMetadata::not_found(PageKind::Organization, &self.site);
        }

        match self.repository.get_organization_by_slug(slug).await {
            Ok(org) => PageMetadata {
                found: true,
                metadata: resolve_organization_metadata(&org, &self.site),
                structured_data: organization_documents(&org, &self.site),
            },
            Err(e) => {
                log_lookup_failure("organization", slug, &e);
                PageMetadata::not_found(PageKind::Organization, &self.site)
            }
        }
    }
}

fn log_lookup_failure(kind: &str, slug: &str, error: &AppError) {
    if error.is_not_found() {
        debug!("{} not found: {}", kind, slug);
    } else {
        warn!(
            "Failed to load {} '{}', serving Not Found metadata: {}",
            kind, slug, error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        DogProfile, ListingRecord, OrganizationRecord, OrganizationSummary,
    };
    use crate::domain::repositories::MockEntityRepository;
    use chrono::Utc;
    use serde_json::json;

    fn create_test_listing(slug: &str) -> ListingRecord {
        ListingRecord {
            id: 1,
            name: "Luna".to_string(),
            slug: slug.to_string(),
            breed: Some("Greyhound".to_string()),
            sex: Some("Female".to_string()),
            age_text: None,
            primary_image_url: None,
            description: None,
            curated_description: None,
            tagline: None,
            organization: OrganizationSummary {
                id: 2,
                name: "Hound Rescue".to_string(),
                slug: "hound-rescue".to_string(),
                city: None,
                country: None,
                adoption_fee: None,
            },
            created_at: Utc::now(),
            updated_at: None,
            profile: DogProfile::default(),
        }
    }

    fn create_test_organization(slug: &str) -> OrganizationRecord {
        OrganizationRecord {
            id: 2,
            name: "Hound Rescue".to_string(),
            slug: slug.to_string(),
            description: None,
            city: Some("Dublin".to_string()),
            country: Some("Ireland".to_string()),
            website_url: None,
            logo_url: None,
            founding_year: None,
            dog_count: Some(4),
            adoption_fee: None,
            updated_at: None,
        }
    }

    fn service(repo: MockEntityRepository) -> PageService {
        PageService::new(Arc::new(repo), Arc::new(SiteConfig::default()))
    }

    #[tokio::test]
    async fn test_listing_page_found() {
        let mut mock_repo = MockEntityRepository::new();
        mock_repo
            .expect_get_listing_by_slug()
            .withf(|slug| slug == "luna-1")
            .times(1)
            .returning(|slug| Ok(create_test_listing(slug)));

        let page = service(mock_repo).listing_page("luna-1").await;

        assert!(page.found);
        assert!(page.metadata.title.starts_with("Luna - Greyhound"));
        assert!(page.metadata.open_graph.is_some());
        assert_eq!(page.structured_data[0].type_name(), "Product");
    }

    #[tokio::test]
    async fn test_listing_page_not_found() {
        let mut mock_repo = MockEntityRepository::new();
        mock_repo
            .expect_get_listing_by_slug()
            .times(1)
            .returning(|_| Err(AppError::not_found("Listing not found", json!({}))));

        let page = service(mock_repo).listing_page("ghost").await;

        assert!(!page.found);
        assert!(page.metadata.title.contains("Not Found"));
        assert!(page.metadata.open_graph.is_none());
        assert!(page.metadata.twitter.is_none());
        assert!(page.structured_data.is_empty());
    }

    #[tokio::test]
    async fn test_listing_page_upstream_failure_is_not_found() {
        let mut mock_repo = MockEntityRepository::new();
        mock_repo
            .expect_get_listing_by_slug()
            .times(1)
            .returning(|_| Err(AppError::upstream("Database error", json!({}))));

        let page = service(mock_repo).listing_page("luna-1").await;

        assert!(!page.found);
        assert!(page.metadata.canonical_url.is_none());
    }

    #[tokio::test]
    async fn test_invalid_slug_skips_repository() {
        let mut mock_repo = MockEntityRepository::new();
        mock_repo.expect_get_listing_by_slug().times(0);
        mock_repo.expect_get_organization_by_slug().times(0);

        let svc = service(mock_repo);
        assert!(!svc.listing_page("../etc/passwd").await.found);
        assert!(!svc.organization_page("Not A Slug").await.found);
    }

    #[tokio::test]
    async fn test_organization_page_found() {
        let mut mock_repo = MockEntityRepository::new();
        mock_repo
            .expect_get_organization_by_slug()
            .times(1)
            .returning(|slug| Ok(create_test_organization(slug)));

        let page = service(mock_repo).organization_page("hound-rescue").await;

        assert!(page.found);
        assert_eq!(
            page.metadata.canonical_url.as_deref(),
            Some("https://www.rescuedogs.me/organizations/hound-rescue")
        );
        assert_eq!(
            page.structured_data[0].type_name(),
            "LocalBusiness+AnimalShelter"
        );
    }

    #[tokio::test]
    async fn test_organization_page_failure() {
        let mut mock_repo = MockEntityRepository::new();
        mock_repo
            .expect_get_organization_by_slug()
            .times(1)
            .returning(|_| Err(AppError::internal("boom", json!({}))));

        let page = service(mock_repo).organization_page("hound-rescue").await;

        assert!(!page.found);
        assert!(page.metadata.title.starts_with("Organization Not Found"));
    }
}
