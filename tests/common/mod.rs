#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use rescue_dog_seo::application::services::AuthService;
use rescue_dog_seo::domain::entities::{
    AdoptionFee, Compatibility, DogProfile, EnergyLevel, ListingRecord, OrganizationRecord,
    OrganizationSummary, ProfilerAttribute, SiteConfig,
};
use rescue_dog_seo::domain::repositories::EntityRepository;
use rescue_dog_seo::error::AppError;
use rescue_dog_seo::infrastructure::cache::{EntityCache, MemoryCache};
use rescue_dog_seo::routes::build_router;
use rescue_dog_seo::state::AppState;

pub const SITE_URL: &str = "https://www.rescuedogs.me";
pub const ADMIN_TOKEN: &str = "test-admin-token-0123";

/// In-memory repository with switchable failures and call counting.
#[derive(Default)]
pub struct FakeEntityRepository {
    listings: RwLock<Vec<ListingRecord>>,
    organizations: RwLock<Vec<OrganizationRecord>>,
    pub fail_listings: AtomicBool,
    pub fail_organizations: AtomicBool,
    pub listing_lookups: AtomicUsize,
}

impl FakeEntityRepository {
    pub fn new(listings: Vec<ListingRecord>, organizations: Vec<OrganizationRecord>) -> Self {
        Self {
            listings: RwLock::new(listings),
            organizations: RwLock::new(organizations),
            ..Self::default()
        }
    }

    pub async fn rename_listing(&self, slug: &str, name: &str) {
        let mut listings = self.listings.write().await;
        if let Some(listing) = listings.iter_mut().find(|l| l.slug == slug) {
            listing.name = name.to_string();
        }
    }

    pub fn set_listings_failing(&self, failing: bool) {
        self.fail_listings.store(failing, Ordering::SeqCst);
    }

    pub fn set_organizations_failing(&self, failing: bool) {
        self.fail_organizations.store(failing, Ordering::SeqCst);
    }

    pub fn listing_lookup_count(&self) -> usize {
        self.listing_lookups.load(Ordering::SeqCst)
    }
}

fn upstream() -> AppError {
    AppError::upstream("Data source unavailable", json!({}))
}

#[async_trait]
impl EntityRepository for FakeEntityRepository {
    async fn get_listing_by_slug(&self, slug: &str) -> Result<ListingRecord, AppError> {
        self.listing_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_listings.load(Ordering::SeqCst) {
            return Err(upstream());
        }
        self.listings
            .read()
            .await
            .iter()
            .find(|l| l.slug == slug)
            .cloned()
            .ok_or_else(|| AppError::not_found("Listing not found", json!({ "slug": slug })))
    }

    async fn get_all_listings(&self) -> Result<Vec<ListingRecord>, AppError> {
        if self.fail_listings.load(Ordering::SeqCst) {
            return Err(upstream());
        }
        Ok(self.listings.read().await.clone())
    }

    async fn get_organization_by_slug(&self, slug: &str) -> Result<OrganizationRecord, AppError> {
        if self.fail_organizations.load(Ordering::SeqCst) {
            return Err(upstream());
        }
        self.organizations
            .read()
            .await
            .iter()
            .find(|o| o.slug == slug)
            .cloned()
            .ok_or_else(|| {
                AppError::not_found("Organization not found", json!({ "slug": slug }))
            })
    }

    async fn get_all_organizations(&self) -> Result<Vec<OrganizationRecord>, AppError> {
        if self.fail_organizations.load(Ordering::SeqCst) {
            return Err(upstream());
        }
        Ok(self.organizations.read().await.clone())
    }
}

pub fn test_organization(slug: &str) -> OrganizationRecord {
    OrganizationRecord {
        id: 3,
        name: "Happy Paws Rescue".to_string(),
        slug: slug.to_string(),
        description: Some("We rescue dogs from kill shelters across Romania.".to_string()),
        city: Some("Berlin".to_string()),
        country: Some("Germany".to_string()),
        website_url: Some("https://happypaws.example.org".to_string()),
        logo_url: Some("https://cdn.example.org/happy-paws.png".to_string()),
        founding_year: Some(2015),
        dog_count: Some(2),
        adoption_fee: Some(AdoptionFee {
            amount: 350.0,
            currency: "EUR".to_string(),
        }),
        updated_at: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
    }
}

pub fn test_listing(slug: &str, name: &str) -> ListingRecord {
    ListingRecord {
        id: 42,
        name: name.to_string(),
        slug: slug.to_string(),
        breed: Some("Labrador Retriever".to_string()),
        sex: Some("Female".to_string()),
        age_text: Some("2 years".to_string()),
        primary_image_url: Some("https://cdn.example.org/bella.jpg".to_string()),
        description: Some("Bella loves long walks & belly rubs.".to_string()),
        curated_description: None,
        tagline: None,
        organization: OrganizationSummary {
            id: 3,
            name: "Happy Paws Rescue".to_string(),
            slug: "happy-paws-rescue".to_string(),
            city: Some("Berlin".to_string()),
            country: Some("Germany".to_string()),
            adoption_fee: Some(AdoptionFee {
                amount: 350.0,
                currency: "EUR".to_string(),
            }),
        },
        created_at: Utc.with_ymd_and_hms(2025, 7, 14, 8, 58, 28).unwrap(),
        updated_at: None,
        profile: DogProfile {
            good_with_children: ProfilerAttribute::new(Some(Compatibility::Yes), Some(0.9)),
            good_with_cats: ProfilerAttribute::new(Some(Compatibility::No), Some(0.3)),
            energy_level: ProfilerAttribute::new(Some(EnergyLevel::High), None),
            ..DogProfile::default()
        },
    }
}

pub fn seeded_repository() -> Arc<FakeEntityRepository> {
    Arc::new(FakeEntityRepository::new(
        vec![
            test_listing("bella-42", "Bella"),
            test_listing("max-43", "Max"),
        ],
        vec![test_organization("happy-paws-rescue")],
    ))
}

pub fn create_test_state(repository: Arc<FakeEntityRepository>) -> AppState {
    let cache = EntityCache::new(Arc::new(MemoryCache::new(3600)));
    AppState::new(
        repository,
        cache,
        SiteConfig::new(SITE_URL, "Rescue Dog Aggregator"),
        AuthService::new(Some(ADMIN_TOKEN)),
    )
}

pub fn create_test_server(repository: Arc<FakeEntityRepository>) -> TestServer {
    TestServer::new(build_router(create_test_state(repository))).unwrap()
}
